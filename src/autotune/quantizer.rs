use crate::autotune::note::{Note, NOTES_PER_OCTAVE};
use crate::autotune::note_table::{NOTE_TABLE, OCTAVES};
use crate::common::ScaledHz;
use crate::error::{Error, Result};

/// Halfway between B0 and C1. Frequencies are halved until they are at or
/// below this value.
pub const OCTAVE_THRESHOLD: ScaledHz = 317_900;

/// The note nearest to a detected frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunedNote {
    pub note: Note,
    pub octave: u8,
}

impl TunedNote {
    /// The canonical table frequency of the note.
    pub fn frequency(&self) -> ScaledHz {
        NOTE_TABLE[self.octave as usize][self.note.index()] as ScaledHz
    }

    pub fn label(&self) -> &'static str {
        self.note.label()
    }

    /// Position in the flattened note table, `octave * 12 + note`.
    pub fn table_index(&self) -> u8 {
        self.octave * NOTES_PER_OCTAVE as u8 + self.note.index() as u8
    }

    /// Inverse of [`table_index`](TunedNote::table_index).
    pub fn from_table_index(index: u8) -> Option<TunedNote> {
        let octave = index as usize / NOTES_PER_OCTAVE;
        if octave >= OCTAVES {
            return None;
        }
        let note = Note::from_index(index as usize % NOTES_PER_OCTAVE)?;
        Some(TunedNote {
            note,
            octave: octave as u8,
        })
    }
}

/// Halves `frequency` until it is at or below [`OCTAVE_THRESHOLD`].
/// Returns the reduced frequency and the number of halvings.
pub fn octave_reduce(frequency: ScaledHz) -> (ScaledHz, u32) {
    let mut reduced = frequency;
    let mut octaves = 0;
    while reduced > OCTAVE_THRESHOLD {
        reduced /= 2;
        octaves += 1;
    }
    (reduced, octaves)
}

/// The octave 0 note closest to `reduced`. Ties go to the lower note.
pub fn nearest_note(reduced: ScaledHz) -> Note {
    let mut note_index = 0;
    let mut min_difference = abs_diff(reduced, NOTE_TABLE[0][0] as ScaledHz);
    for (index, frequency) in NOTE_TABLE[0].iter().enumerate().skip(1) {
        let difference = abs_diff(reduced, *frequency as ScaledHz);
        if difference < min_difference {
            min_difference = difference;
            note_index = index;
        }
    }
    Note::ALL[note_index]
}

/// Maps a frequency to the nearest note of the table.
///
/// Returns [`Error::OctaveOutOfRange`] for frequencies that would need
/// more octave reductions than the table has octaves, i.e above roughly
/// 8138 Hz.
///
/// ```
/// use microtune::autotune::{autotune, Note};
///
/// // 445.3 Hz is corrected to A4 at 440 Hz.
/// let tuned = autotune(4_453_125).unwrap();
/// assert_eq!(tuned.note, Note::A);
/// assert_eq!(tuned.octave, 4);
/// assert_eq!(tuned.frequency(), 4_400_000);
/// ```
pub fn autotune(frequency: ScaledHz) -> Result<TunedNote> {
    let (reduced, octaves) = octave_reduce(frequency);
    if octaves as usize >= OCTAVES {
        return Err(Error::OctaveOutOfRange { frequency, octaves });
    }
    Ok(TunedNote {
        note: nearest_note(reduced),
        octave: octaves as u8,
    })
}

fn abs_diff(a: ScaledHz, b: ScaledHz) -> ScaledHz {
    if a > b {
        a - b
    } else {
        b - a
    }
}
