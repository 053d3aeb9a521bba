//! Common algorithms and utilities.

mod fft;
mod fixed;

pub use fft::{complex_fft_in_place, is_supported_fft_size};
pub use fixed::{bin_frequency, hz_to_scaled, q16_phase_step, scaled_to_hz, ScaledHz, HZ_SCALE, Q16_SHIFT};
