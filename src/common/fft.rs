use core::convert::TryInto;

use microfft::Complex32;

/// Performs an in-place complex FFT on a given buffer using microfft's
/// precomputed twiddle factors.
pub fn complex_fft_in_place(buffer: &mut [Complex32]) {
    let fft_size = buffer.len();
    match fft_size {
        16 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_16(buffer);
            }
        }
        32 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_32(buffer);
            }
        }
        64 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_64(buffer);
            }
        }
        128 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_128(buffer);
            }
        }
        256 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_256(buffer);
            }
        }
        512 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_512(buffer);
            }
        }
        1024 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_1024(buffer);
            }
        }
        2048 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_2048(buffer);
            }
        }
        4096 => {
            if let Ok(buffer) = buffer.try_into() {
                let _ = microfft::complex::cfft_4096(buffer);
            }
        }
        _ => panic!("Unsupported fft size {}", fft_size),
    }
}

/// Returns true if microfft provides a transform of the given size.
pub fn is_supported_fft_size(fft_size: usize) -> bool {
    fft_size.is_power_of_two() && (16..=4096).contains(&fft_size)
}
