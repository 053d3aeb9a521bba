//! Fixed point helpers shared by the analysis and synthesis paths.

/// A frequency in units of 1/10000 Hz, i.e 440 Hz is `4_400_000`.
pub type ScaledHz = u64;

/// The number of [`ScaledHz`] units per Hz.
pub const HZ_SCALE: ScaledHz = 10_000;

/// The number of fractional bits of the Q16 phase format.
pub const Q16_SHIFT: u32 = 16;

/// Converts a whole number of Hz to [`ScaledHz`].
pub const fn hz_to_scaled(hz: u32) -> ScaledHz {
    hz as ScaledHz * HZ_SCALE
}

/// Converts a [`ScaledHz`] value to whole Hz, truncating.
pub const fn scaled_to_hz(frequency: ScaledHz) -> ScaledHz {
    frequency / HZ_SCALE
}

/// The center frequency of FFT bin `bin`, i.e `bin * sample_rate / fft_size`.
pub fn bin_frequency(bin: usize, sample_rate: u32, fft_size: usize) -> ScaledHz {
    (bin as u64) * (sample_rate as u64) * HZ_SCALE / (fft_size as u64)
}

/// The Q16 wavetable index increment per tick that plays `frequency`
/// on a table of `table_len` samples scanned `rate` times per second.
/// Saturates at `u64::MAX`.
pub fn q16_phase_step(frequency: ScaledHz, table_len: usize, rate: u32) -> u64 {
    let numerator = (frequency as u128) * (table_len as u128) << Q16_SHIFT;
    let denominator = (rate as u128) * (HZ_SCALE as u128);
    (numerator / denominator).min(u64::MAX as u128) as u64
}
