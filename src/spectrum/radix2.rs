use core::f32::consts::PI;

/// Reorders `re` and `im` so that element `i` ends up at the bit reversed
/// position of `i`. Walks a running reversed index instead of reversing the
/// bits of every index.
pub fn bit_reverse_permute(re: &mut [f32], im: &mut [f32]) {
    let n = re.len();
    let mut j = 0;
    for i in 0..n {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut m = n / 2;
        while j >= m && m > 0 {
            j -= m;
            m /= 2;
        }
        j += m;
    }
}

/// Performs an in-place radix-2 decimation in time FFT.
///
/// The twiddle factor of each stage is advanced by repeated rotation instead
/// of being evaluated for every butterfly. This accumulates some rounding
/// error over the last stages, which is small compared to the peak
/// separation the dominant bin search relies on.
///
/// # Panics
///
/// If `re` and `im` differ in length or the length is not a power of two.
pub fn fft_in_place(re: &mut [f32], im: &mut [f32]) {
    let n = re.len();
    if im.len() != n {
        panic!("Real and imaginary parts must have the same length")
    }
    if !n.is_power_of_two() {
        panic!("FFT size must be a power of two, got {}", n)
    }

    bit_reverse_permute(re, im);

    let mut half = 1;
    while half < n {
        let group_size = 2 * half;
        let theta = -PI / (half as f32);
        let rotation_re = libm::cosf(theta);
        let rotation_im = libm::sinf(theta);

        for group_start in (0..n).step_by(group_size) {
            let mut w_re = 1.0_f32;
            let mut w_im = 0.0_f32;
            for k in 0..half {
                let top = group_start + k;
                let bottom = top + half;

                let t_re = w_re * re[bottom] - w_im * im[bottom];
                let t_im = w_re * im[bottom] + w_im * re[bottom];

                re[bottom] = re[top] - t_re;
                im[bottom] = im[top] - t_im;
                re[top] += t_re;
                im[top] += t_im;

                let prev_re = w_re;
                w_re = prev_re * rotation_re - w_im * rotation_im;
                w_im = prev_re * rotation_im + w_im * rotation_re;
            }
        }
        half = group_size;
    }
}

/// Returns the index and squared magnitude of the strongest bin in
/// `1..n / 2`. DC and the mirrored upper half are skipped. Ties go to the
/// lowest bin, and a spectrum without any energy in that range gives bin 0.
pub fn dominant_bin(re: &[f32], im: &[f32]) -> (usize, f32) {
    let mut max_magnitude = 0.0;
    let mut bin = 0;
    for (i, (re, im)) in re.iter().zip(im.iter()).enumerate().take(re.len() / 2).skip(1) {
        let magnitude = re * re + im * im;
        if magnitude > max_magnitude {
            max_magnitude = magnitude;
            bin = i;
        }
    }
    (bin, max_magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    // Reference O(n^2) DFT, only used for testing.
    fn dft(signal: &[f32]) -> (Vec<f32>, Vec<f32>) {
        let n = signal.len();
        let mut re = vec![0.0; n];
        let mut im = vec![0.0; n];
        for k in 0..n {
            for (t, x) in signal.iter().enumerate() {
                let angle = -2.0 * core::f64::consts::PI * ((k * t) as f64) / (n as f64);
                re[k] += (*x as f64 * angle.cos()) as f32;
                im[k] += (*x as f64 * angle.sin()) as f32;
            }
        }
        (re, im)
    }

    #[test]
    fn test_bit_reversal() {
        let mut re: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let mut im = vec![0.0; 8];
        bit_reverse_permute(&mut re, &mut im);
        assert_eq!(re, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
    }

    #[test]
    fn test_matches_dft() {
        let signal: Vec<f32> = vec![
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, -3.0, 0.5, 2.5, -1.0, 0.0, 9.0, -4.0, 1.5,
        ];
        let (expected_re, expected_im) = dft(&signal);

        let mut re = signal.clone();
        let mut im = vec![0.0; signal.len()];
        fft_in_place(&mut re, &mut im);

        let epsilon = 1e-3;
        for k in 0..signal.len() {
            assert!((re[k] - expected_re[k]).abs() <= epsilon);
            assert!((im[k] - expected_im[k]).abs() <= epsilon);
        }
    }

    #[test]
    fn test_dominant_bin_tie_break() {
        let mut re = vec![0.0; 16];
        let im = vec![0.0; 16];
        re[3] = 2.0;
        re[5] = -2.0;
        assert_eq!(dominant_bin(&re, &im), (3, 4.0));
    }

    #[test]
    fn test_dominant_bin_skips_dc_and_mirror() {
        let mut re = vec![0.0; 16];
        let im = vec![0.0; 16];
        re[0] = 100.0;
        re[8] = 100.0;
        re[12] = 100.0;
        re[2] = 1.0;
        assert_eq!(dominant_bin(&re, &im).0, 2);
    }

    #[test]
    fn test_silence() {
        let mut re = vec![0.0; 64];
        let mut im = vec![0.0; 64];
        fft_in_place(&mut re, &mut im);
        assert_eq!(dominant_bin(&re, &im), (0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_non_power_of_two() {
        let mut re = vec![0.0; 12];
        let mut im = vec![0.0; 12];
        fft_in_place(&mut re, &mut im);
    }
}
