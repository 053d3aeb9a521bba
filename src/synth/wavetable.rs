use alloc::{boxed::Box, vec};
use core::f32::consts::PI;

use micromath::F32Ext;

/// One cycle of a waveform, scanned by the oscillators of a
/// [`Synthesizer`](crate::synth::Synthesizer).
pub struct Wavetable {
    samples: Box<[i16]>,
}

impl Wavetable {
    /// A full scale sine cycle of `len` samples.
    ///
    /// # Panics
    ///
    /// If `len` is zero.
    pub fn sine(len: usize) -> Self {
        if len == 0 {
            panic!("Wavetable length must be greater than 0")
        }
        let mut samples = vec![0_i16; len].into_boxed_slice();
        for (i, sample) in samples.iter_mut().enumerate() {
            let x = 2.0 * PI * (i as f32) / (len as f32);
            *sample = (32767.0 * F32Ext::sin(x)) as i16;
        }
        Wavetable { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }
}

impl core::ops::Index<usize> for Wavetable {
    type Output = i16;

    fn index(&self, index: usize) -> &i16 {
        &self.samples[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_shape() {
        let table = Wavetable::sine(1000);
        assert_eq!(table.len(), 1000);
        assert!(table[0].abs() < 100);
        assert!(table[250] > 32400);
        assert!(table[500].abs() < 100);
        assert!(table[750] < -32400);
        // Odd symmetry around the half cycle.
        for i in 1..500 {
            assert!((table[i] as i32 + table[1000 - i] as i32).abs() < 200);
        }
    }

    #[test]
    #[should_panic]
    fn test_empty_table() {
        Wavetable::sine(0);
    }
}
