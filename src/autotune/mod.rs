//! Maps an arbitrary frequency to the nearest note of a 9 octave equal
//! tempered table.
//!
//! The input is first halved until it falls into the lowest octave, the
//! nearest note of that octave is picked and the canonical frequency of the
//! note in the input's octave is looked up. Frequencies are given in
//! [`ScaledHz`](crate::common::ScaledHz) so that everything stays in
//! integer arithmetic.

mod note;
mod note_table;
mod quantizer;

pub use note::{Note, NOTES_PER_OCTAVE};
pub use note_table::{canonical_frequency, NOTE_TABLE, OCTAVES};
pub use quantizer::{autotune, nearest_note, octave_reduce, TunedNote, OCTAVE_THRESHOLD};
