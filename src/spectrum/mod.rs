//! Dominant frequency estimation using a radix-2 FFT.
//!
//! A [`SpectralAnalyzer`] takes one full buffer of ADC samples, computes its
//! spectrum and reports the strongest bin between DC and the Nyquist
//! frequency as a [`SpectralPeak`].
//!
//! ```
//! use microtune::spectrum::SpectralAnalyzer;
//!
//! let sample_rate = 24000;
//! let fft_size = 1024;
//! // A tone exactly at the center of bin 100, i.e 2343.75 Hz.
//! let samples: Vec<u16> = (0..fft_size)
//!     .map(|i| {
//!         let phase = 2.0 * std::f32::consts::PI * 100.0 * (i as f32) / (fft_size as f32);
//!         (2048.0 + 1000.0 * phase.sin()) as u16
//!     })
//!     .collect();
//!
//! let mut analyzer = SpectralAnalyzer::new(sample_rate, fft_size);
//! let peak = analyzer.analyze(&samples);
//! assert_eq!(peak.bin, 100);
//! assert_eq!(peak.hz(), 2343);
//! ```

mod analyzer;
mod radix2;

pub use analyzer::{FftKernel, SpectralAnalyzer, SpectralPeak};
pub use radix2::{bit_reverse_permute, dominant_bin, fft_in_place};
