use log::{debug, info, warn};

use crate::acquisition::Consumer;
use crate::autotune::{autotune, TunedNote};
use crate::config::TunerConfig;
use crate::display::{input_message, note_message, output_message, NoteDisplay};
use crate::error::{Error, Result};
use crate::shared::TuningCell;
use crate::spectrum::{SpectralAnalyzer, SpectralPeak};

/// Where the tuner is in its acquisition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The acquisition interrupt is filling a buffer.
    Filling,
    /// A full buffer is waiting to be analyzed.
    Analyzing,
}

/// What was done with the dominant frequency of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// The frequency was mapped to a note, which is now being played.
    Tuned(TunedNote),
    /// The buffer had no energy above DC. The output is silenced.
    Silent,
    /// The frequency is above the note table. The previous output is kept.
    OutOfRange,
}

/// The outcome of analyzing one buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub peak: SpectralPeak,
    pub correction: Correction,
}

/// The foreground loop: analyzes each completed sample buffer, publishes the
/// corrected pitch for the synthesis interrupt and updates the displays.
pub struct Tuner<'a, const N: usize> {
    consumer: Consumer<'a, N>,
    analyzer: SpectralAnalyzer,
    tuning: &'a TuningCell,
    missed_conversions: u32,
    dropped_frames: u32,
}

impl<'a, const N: usize> Tuner<'a, N> {
    pub fn new(config: &TunerConfig, consumer: Consumer<'a, N>, tuning: &'a TuningCell) -> Result<Self> {
        config.validate()?;
        if config.buffer_size != N {
            return Err(Error::InvalidConfig(
                "buffer size must equal the sample ring capacity",
            ));
        }
        info!(
            "tuner started: {} samples at {} Hz, {:?} FFT",
            N, config.sample_rate, config.fft_kernel
        );
        Ok(Tuner {
            consumer,
            analyzer: SpectralAnalyzer::from_options(config.sample_rate, N, config.fft_kernel),
            tuning,
            missed_conversions: 0,
            dropped_frames: 0,
        })
    }

    /// Analyzes the most recently completed buffer, if there is one.
    /// Returns `None` while the next buffer is still being filled.
    pub fn poll<D: NoteDisplay>(&mut self, display: &mut D) -> Option<Analysis> {
        self.check_faults();

        let buffer = self.consumer.take_full()?;
        let peak = self.analyzer.analyze(&buffer[..]);
        drop(buffer);

        let correction = if peak.is_silent() {
            self.tuning.publish(None);
            Correction::Silent
        } else {
            match autotune(peak.frequency) {
                Ok(tuned) => {
                    self.tuning.publish(Some(tuned));
                    Correction::Tuned(tuned)
                }
                Err(err) => {
                    warn!("not correcting {} Hz: {}", peak.hz(), err);
                    Correction::OutOfRange
                }
            }
        };
        debug!(
            "bin {} ({} Hz) -> {:?}",
            peak.bin,
            peak.hz(),
            correction
        );

        let playing = self.tuning.load();
        display.show_note(&note_message(playing.as_ref()));
        display.show_frequencies(
            &input_message(peak.frequency),
            &output_message(self.tuning.frequency()),
        );

        Some(Analysis { peak, correction })
    }

    /// Polls forever.
    pub fn run<D: NoteDisplay>(&mut self, display: &mut D) -> ! {
        loop {
            if self.poll(display).is_none() {
                core::hint::spin_loop();
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.consumer.is_ready() {
            Phase::Analyzing
        } else {
            Phase::Filling
        }
    }

    /// The number of samples written into the buffer being filled.
    pub fn fill_level(&self) -> usize {
        self.consumer.write_index()
    }

    pub fn missed_conversions(&self) -> u32 {
        self.consumer.missed_conversions()
    }

    pub fn dropped_frames(&self) -> u32 {
        self.consumer.dropped_frames()
    }

    pub fn analyzer(&self) -> &SpectralAnalyzer {
        &self.analyzer
    }

    fn check_faults(&mut self) {
        let missed = self.consumer.missed_conversions();
        if missed != self.missed_conversions {
            warn!(
                "{} acquisition ticks lost waiting for the ADC",
                missed.wrapping_sub(self.missed_conversions)
            );
            self.missed_conversions = missed;
        }
        let dropped = self.consumer.dropped_frames();
        if dropped != self.dropped_frames {
            warn!(
                "{} sample buffers dropped while analyzing",
                dropped.wrapping_sub(self.dropped_frames)
            );
            self.dropped_frames = dropped;
        }
    }
}
