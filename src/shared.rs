use core::sync::atomic::{AtomicU8, Ordering};

use crate::autotune::TunedNote;
use crate::common::ScaledHz;

const SILENT: u8 = u8::MAX;

/// The latest tuning result, written by the foreground loop and read by the
/// synthesis interrupt.
///
/// The result is stored as its position in the note table, so a single
/// byte sized atomic store publishes note and frequency together and a
/// reader can never observe one without the other.
pub struct TuningCell {
    table_index: AtomicU8,
}

impl TuningCell {
    /// Creates a cell holding silence.
    pub const fn new() -> Self {
        TuningCell {
            table_index: AtomicU8::new(SILENT),
        }
    }

    /// Publishes a new result. `None` publishes silence.
    pub fn publish(&self, tuned: Option<TunedNote>) {
        let value = tuned.map_or(SILENT, |tuned| tuned.table_index());
        self.table_index.store(value, Ordering::Release);
    }

    /// The most recently published result, `None` for silence.
    pub fn load(&self) -> Option<TunedNote> {
        TunedNote::from_table_index(self.table_index.load(Ordering::Acquire))
    }

    /// The frequency the synthesizer should play, 0 for silence.
    pub fn frequency(&self) -> ScaledHz {
        self.load().map_or(0, |tuned| tuned.frequency())
    }
}

impl Default for TuningCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autotune::Note;

    #[test]
    fn test_publish() {
        let cell = TuningCell::new();
        assert_eq!(cell.load(), None);
        assert_eq!(cell.frequency(), 0);

        let a4 = TunedNote { note: Note::A, octave: 4 };
        cell.publish(Some(a4));
        assert_eq!(cell.load(), Some(a4));
        assert_eq!(cell.frequency(), 4_400_000);

        cell.publish(None);
        assert_eq!(cell.load(), None);
    }
}
