use alloc::{boxed::Box, vec};

use microfft::Complex32;

use crate::common::{bin_frequency, complex_fft_in_place, is_supported_fft_size, scaled_to_hz, ScaledHz};
use crate::spectrum::radix2::{dominant_bin, fft_in_place};

/// The FFT implementation used by a [`SpectralAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftKernel {
    /// Radix-2 FFT with twiddle factors advanced by a rotation recurrence.
    Recurrence,
    /// microfft's FFT with precomputed twiddle factors.
    Exact,
}

/// The strongest spectral component of an analyzed buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// FFT bin index, 0 if the buffer had no energy outside DC.
    pub bin: usize,
    /// Squared magnitude of the bin.
    pub magnitude_sq: f32,
    /// The center frequency of the bin.
    pub frequency: ScaledHz,
}

impl SpectralPeak {
    /// The peak frequency in whole Hz.
    pub fn hz(&self) -> ScaledHz {
        scaled_to_hz(self.frequency)
    }

    /// True if no bin above DC carried any energy.
    pub fn is_silent(&self) -> bool {
        self.bin == 0
    }
}

/// Finds the dominant frequency of a buffer of ADC samples.
///
/// No memory is allocated after construction and no state is carried
/// between calls to [`analyze`](SpectralAnalyzer::analyze), so identical
/// buffers always give identical peaks.
pub struct SpectralAnalyzer {
    sample_rate: u32,
    kernel: FftKernel,
    re: Box<[f32]>,
    im: Box<[f32]>,
    /// Scratch buffer for the exact kernel. Empty for the recurrence kernel.
    complex: Box<[Complex32]>,
}

impl SpectralAnalyzer {
    pub fn new(sample_rate: u32, fft_size: usize) -> Self {
        SpectralAnalyzer::from_options(sample_rate, fft_size, FftKernel::Recurrence)
    }

    /// # Panics
    ///
    /// If `sample_rate` is zero or `fft_size` is not a power of two
    /// between 16 and 4096.
    pub fn from_options(sample_rate: u32, fft_size: usize, kernel: FftKernel) -> Self {
        if sample_rate == 0 {
            panic!("Sample rate must be greater than 0")
        }
        if !is_supported_fft_size(fft_size) {
            panic!("FFT size must be a power of two between 16 and 4096, got {}", fft_size)
        }
        let complex_size = match kernel {
            FftKernel::Recurrence => 0,
            FftKernel::Exact => fft_size,
        };
        SpectralAnalyzer {
            sample_rate,
            kernel,
            re: vec![0.0; fft_size].into_boxed_slice(),
            im: vec![0.0; fft_size].into_boxed_slice(),
            complex: vec![Complex32 { re: 0.0, im: 0.0 }; complex_size].into_boxed_slice(),
        }
    }

    /// Computes the spectrum of `samples` and returns its strongest bin.
    ///
    /// # Panics
    ///
    /// If the number of samples differs from the FFT size.
    pub fn analyze(&mut self, samples: &[u16]) -> SpectralPeak {
        if samples.len() != self.re.len() {
            panic!(
                "Got {} samples, expected {}",
                samples.len(),
                self.re.len()
            )
        }

        match self.kernel {
            FftKernel::Recurrence => {
                for ((re, im), sample) in self.re.iter_mut().zip(self.im.iter_mut()).zip(samples) {
                    *re = *sample as f32;
                    *im = 0.0;
                }
                fft_in_place(&mut self.re, &mut self.im);
            }
            FftKernel::Exact => {
                for (value, sample) in self.complex.iter_mut().zip(samples) {
                    value.re = *sample as f32;
                    value.im = 0.0;
                }
                complex_fft_in_place(&mut self.complex);
                for ((re, im), value) in self.re.iter_mut().zip(self.im.iter_mut()).zip(self.complex.iter()) {
                    *re = value.re;
                    *im = value.im;
                }
            }
        }

        let (bin, magnitude_sq) = dominant_bin(&self.re, &self.im);
        SpectralPeak {
            bin,
            magnitude_sq,
            frequency: bin_frequency(bin, self.sample_rate, self.re.len()),
        }
    }

    /// Real and imaginary parts of the most recently computed spectrum.
    pub fn spectrum(&self) -> (&[f32], &[f32]) {
        (&self.re[..], &self.im[..])
    }

    /// The width of one FFT bin.
    pub fn bin_width(&self) -> ScaledHz {
        bin_frequency(1, self.sample_rate, self.re.len())
    }

    pub fn fft_size(&self) -> usize {
        self.re.len()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn kernel(&self) -> FftKernel {
        self.kernel
    }
}
