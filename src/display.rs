//! Text shown on the note and frequency displays.
//!
//! The display drivers are external. They receive ready made messages
//! through [`NoteDisplay`] and are expected to hand them to a DMA style
//! transfer without blocking the caller.

use core::fmt::Write;

use heapless::String;

use crate::autotune::TunedNote;
use crate::common::{scaled_to_hz, ScaledHz};

/// Capacity of a formatted display line.
pub const LINE_CAPACITY: usize = 20;

/// A line of display text.
pub type Line = String<LINE_CAPACITY>;

/// Sink for the tuner's display output.
pub trait NoteDisplay {
    /// Shows the note message, e.g `"Note Ab"`, on the segment display.
    fn show_note(&mut self, message: &str);
    /// Shows the detected and corrected frequencies on the character display.
    fn show_frequencies(&mut self, input: &str, output: &str);
}

/// Discards everything.
impl NoteDisplay for () {
    fn show_note(&mut self, _: &str) {}
    fn show_frequencies(&mut self, _: &str, _: &str) {}
}

/// `"Note A "`, `"Note Db"`, or `"Note --"` when there is no note.
pub fn note_message(tuned: Option<&TunedNote>) -> Line {
    let label = tuned.map_or("--", |tuned| tuned.label());
    let mut line = Line::new();
    // The message is always shorter than the line capacity.
    let _ = write!(line, "Note {}", label);
    line
}

/// `"Input: 445hz"`
pub fn input_message(frequency: ScaledHz) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Input: {}hz", scaled_to_hz(frequency));
    line
}

/// `"Output: 440hz"`
pub fn output_message(frequency: ScaledHz) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Output: {}hz", scaled_to_hz(frequency));
    line
}
