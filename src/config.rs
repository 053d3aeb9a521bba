//! Rates, sizes and levels shared by the tuner components.

use crate::common::{is_supported_fft_size, Q16_SHIFT};
use crate::error::{Error, Result};
use crate::spectrum::FftKernel;

/// The ADC tick rate in Hz. The spectral analyzer must use the same rate.
pub const SAMPLE_RATE: u32 = 24_000;
/// The number of samples per analyzed buffer.
pub const BUFFER_SIZE: usize = 1024;
/// The DAC tick rate in Hz.
pub const SYNTHESIS_RATE: u32 = 20_000;
/// The number of samples in the single cycle sine table.
pub const WAVETABLE_LEN: usize = 1000;
/// The output gain applied before the final shift.
pub const VOLUME: i32 = 2048;
/// The default number of end of conversion polls per acquisition tick.
pub const CONVERSION_SPIN_LIMIT: u32 = 10_000;

/// Tuner configuration. [`Default`] gives the reference device constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunerConfig {
    /// Acquisition tick rate in Hz.
    pub sample_rate: u32,
    /// Samples per analysis buffer. Must be a power of two.
    pub buffer_size: usize,
    /// Synthesis tick rate in Hz.
    pub synthesis_rate: u32,
    /// Wavetable length in samples.
    pub wavetable_len: usize,
    /// Output gain.
    pub volume: i32,
    /// Maximum number of end of conversion polls per acquisition tick.
    pub conversion_spin_limit: u32,
    /// The FFT implementation used by the spectral analyzer.
    pub fft_kernel: FftKernel,
}

impl Default for TunerConfig {
    fn default() -> Self {
        TunerConfig {
            sample_rate: SAMPLE_RATE,
            buffer_size: BUFFER_SIZE,
            synthesis_rate: SYNTHESIS_RATE,
            wavetable_len: WAVETABLE_LEN,
            volume: VOLUME,
            conversion_spin_limit: CONVERSION_SPIN_LIMIT,
            fft_kernel: FftKernel::Recurrence,
        }
    }
}

impl TunerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidConfig("sample rate must be greater than 0"));
        }
        if self.synthesis_rate == 0 {
            return Err(Error::InvalidConfig("synthesis rate must be greater than 0"));
        }
        if !is_supported_fft_size(self.buffer_size) {
            return Err(Error::InvalidConfig(
                "buffer size must be a power of two between 16 and 4096",
            ));
        }
        if self.wavetable_len == 0 {
            return Err(Error::InvalidConfig("wavetable length must be greater than 0"));
        }
        // Two wrap periods must fit in the u32 phase accumulator.
        if (self.wavetable_len as u64) << (Q16_SHIFT + 1) > u32::MAX as u64 {
            return Err(Error::InvalidConfig("wavetable is too long for a Q16 phase"));
        }
        if self.volume < 0 {
            return Err(Error::InvalidConfig("volume must not be negative"));
        }
        if self.conversion_spin_limit == 0 {
            return Err(Error::InvalidConfig("conversion spin limit must be greater than 0"));
        }
        Ok(())
    }
}
