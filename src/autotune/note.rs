use core::fmt;

/// The number of notes per octave.
pub const NOTES_PER_OCTAVE: usize = 12;

/// A pitch class of the equal tempered scale. Flats are used for the
/// black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Note {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl Note {
    pub const ALL: [Note; NOTES_PER_OCTAVE] = [
        Note::C,
        Note::Db,
        Note::D,
        Note::Eb,
        Note::E,
        Note::F,
        Note::Gb,
        Note::G,
        Note::Ab,
        Note::A,
        Note::Bb,
        Note::B,
    ];

    /// Returns the note at position `index` within the octave, starting at C.
    pub fn from_index(index: usize) -> Option<Note> {
        Note::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The two character label shown on the segment display, padded with a
    /// space for natural notes.
    pub fn label(self) -> &'static str {
        match self {
            Note::C => "C ",
            Note::Db => "Db",
            Note::D => "D ",
            Note::Eb => "Eb",
            Note::E => "E ",
            Note::F => "F ",
            Note::Gb => "Gb",
            Note::G => "G ",
            Note::Ab => "Ab",
            Note::A => "A ",
            Note::Bb => "Bb",
            Note::B => "B ",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices() {
        for (index, note) in Note::ALL.iter().enumerate() {
            assert_eq!(note.index(), index);
            assert_eq!(Note::from_index(index), Some(*note));
            assert_eq!(note.label().len(), 2);
        }
        assert_eq!(Note::from_index(12), None);
    }
}
