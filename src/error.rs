use crate::common::ScaledHz;

/// Errors reported by the tuner components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The ADC did not signal end of conversion within the allowed
    /// number of polls. The acquisition tick was dropped.
    #[error("conversion not complete after {polls} polls")]
    ConversionTimeout { polls: u32 },
    /// The frequency lies above the highest octave of the note table.
    #[error("frequency {frequency} needs {octaves} octave reductions, the note table has 9 octaves")]
    OctaveOutOfRange { frequency: ScaledHz, octaves: u32 },
    /// A configuration value is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
