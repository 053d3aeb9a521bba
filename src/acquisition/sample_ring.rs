use core::cell::UnsafeCell;
use core::ops::Deref;
use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, AtomicUsize, Ordering};

/// A ping-pong pair of sample buffers shared between an acquisition
/// interrupt ([`Producer`]) and the foreground loop ([`Consumer`]).
///
/// The producer always writes into the active buffer. When it wraps around,
/// the filled buffer is handed to the consumer by flipping the active index,
/// unless the consumer is still holding the other buffer, in which case the
/// frame is dropped and the producer refills its current buffer.
///
/// Only atomic loads and stores are used, so the ring works on cores without
/// compare-and-swap. The handoff requires that the producer runs as an
/// interrupt handler on the same core as the consumer, i.e that a call to
/// [`Producer::push`] is never interleaved with another instruction of the
/// consumer.
pub struct SampleRing<const N: usize> {
    buffers: [UnsafeCell<[u16; N]>; 2],
    /// The next slot to write in the active buffer.
    write_index: AtomicUsize,
    /// The buffer currently written by the producer.
    active: AtomicU8,
    /// Set when the inactive buffer holds a complete, unread frame.
    ready: AtomicBool,
    /// Set while the consumer reads the inactive buffer.
    claimed: AtomicBool,
    missed_conversions: AtomicU32,
    dropped_frames: AtomicU32,
}

// Access to the buffers is arbitrated by `active` and `claimed`.
unsafe impl<const N: usize> Sync for SampleRing<N> {}

impl<const N: usize> SampleRing<N> {
    pub const fn new() -> Self {
        SampleRing {
            buffers: [UnsafeCell::new([0; N]), UnsafeCell::new([0; N])],
            write_index: AtomicUsize::new(0),
            active: AtomicU8::new(0),
            ready: AtomicBool::new(false),
            claimed: AtomicBool::new(false),
            missed_conversions: AtomicU32::new(0),
            dropped_frames: AtomicU32::new(0),
        }
    }

    /// Splits the ring into its producer and consumer halves.
    pub fn split(&mut self) -> (Producer<'_, N>, Consumer<'_, N>) {
        let ring: &Self = self;
        (Producer { ring }, Consumer { ring })
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for SampleRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Increments a counter that only has a single writer.
fn bump(counter: &AtomicU32) {
    let value = counter.load(Ordering::Relaxed);
    counter.store(value.wrapping_add(1), Ordering::Release);
}

/// The writing half of a [`SampleRing`], owned by the acquisition interrupt.
pub struct Producer<'a, const N: usize> {
    ring: &'a SampleRing<N>,
}

impl<'a, const N: usize> Producer<'a, N> {
    /// Stores a sample at the write index and advances the index,
    /// handing the buffer over to the consumer when it is full.
    pub fn push(&mut self, sample: u16) {
        let ring = self.ring;
        let active = ring.active.load(Ordering::Relaxed) as usize;
        let index = ring.write_index.load(Ordering::Relaxed);
        // Safety: the consumer never reads the active buffer.
        unsafe {
            (*ring.buffers[active].get())[index] = sample;
        }
        let next = (index + 1) % N;
        ring.write_index.store(next, Ordering::Release);

        if next == 0 {
            if ring.claimed.load(Ordering::Acquire) {
                bump(&ring.dropped_frames);
            } else {
                ring.active.store((active ^ 1) as u8, Ordering::Release);
                ring.ready.store(true, Ordering::Release);
            }
        }
    }

    /// Records an acquisition tick that produced no sample.
    pub fn record_missed_conversion(&mut self) {
        bump(&self.ring.missed_conversions);
    }

    pub fn write_index(&self) -> usize {
        self.ring.write_index.load(Ordering::Relaxed)
    }
}

/// The reading half of a [`SampleRing`], owned by the foreground loop.
pub struct Consumer<'a, const N: usize> {
    ring: &'a SampleRing<N>,
}

impl<'a, const N: usize> Consumer<'a, N> {
    /// Claims the most recently completed buffer, if there is one that has
    /// not been read yet. The producer will not touch it until the returned
    /// guard is dropped.
    pub fn take_full(&mut self) -> Option<FullBuffer<'_, N>> {
        let ring = self.ring;
        if !ring.ready.load(Ordering::Acquire) {
            return None;
        }
        ring.claimed.store(true, Ordering::SeqCst);
        let index = (ring.active.load(Ordering::SeqCst) ^ 1) as usize;
        ring.ready.store(false, Ordering::SeqCst);
        // Safety: the producer writes only the active buffer and does not
        // flip it while `claimed` is set.
        let samples = unsafe { &*ring.buffers[index].get() };
        Some(FullBuffer { samples, claimed: &ring.claimed })
    }

    /// The number of samples written into the buffer currently being filled.
    pub fn write_index(&self) -> usize {
        self.ring.write_index.load(Ordering::Acquire)
    }

    /// True if a completed buffer is waiting to be claimed.
    pub fn is_ready(&self) -> bool {
        self.ring.ready.load(Ordering::Acquire)
    }

    /// The number of acquisition ticks that timed out waiting for the ADC.
    pub fn missed_conversions(&self) -> u32 {
        self.ring.missed_conversions.load(Ordering::Acquire)
    }

    /// The number of completed buffers that were overwritten because the
    /// consumer still held the previous one.
    pub fn dropped_frames(&self) -> u32 {
        self.ring.dropped_frames.load(Ordering::Acquire)
    }
}

/// A completed buffer claimed by the consumer. Released on drop.
pub struct FullBuffer<'a, const N: usize> {
    samples: &'a [u16; N],
    claimed: &'a AtomicBool,
}

impl<'a, const N: usize> Deref for FullBuffer<'a, N> {
    type Target = [u16; N];

    fn deref(&self) -> &Self::Target {
        self.samples
    }
}

impl<'a, const N: usize> Drop for FullBuffer<'a, N> {
    fn drop(&mut self) {
        self.claimed.store(false, Ordering::Release);
    }
}
