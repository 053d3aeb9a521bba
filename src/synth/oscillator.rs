use crate::common::{q16_phase_step, ScaledHz, Q16_SHIFT};

/// A phase accumulator scanning a wavetable. Step and phase are Q16 table
/// indices, i.e the wavetable index is `phase >> 16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Oscillator {
    frequency: ScaledHz,
    step: u32,
    phase: u32,
}

impl Oscillator {
    pub const fn new() -> Self {
        Oscillator {
            frequency: 0,
            step: 0,
            phase: 0,
        }
    }

    /// Retunes the oscillator. A frequency of 0 stops it and resets the
    /// phase to the start of the table.
    pub fn set_frequency(&mut self, frequency: ScaledHz, table_len: usize, rate: u32) {
        if frequency == 0 {
            self.frequency = 0;
            self.step = 0;
            self.phase = 0;
            return;
        }
        if frequency != self.frequency {
            let wrap = wrap_limit(table_len) as u64;
            self.frequency = frequency;
            self.step = (q16_phase_step(frequency, table_len, rate) % wrap) as u32;
        }
    }

    /// Advances the phase by one step, wrapping at the end of the table, and
    /// returns the table index to play.
    pub fn advance(&mut self, table_len: usize) -> usize {
        let wrap = wrap_limit(table_len);
        self.phase += self.step;
        if self.phase >= wrap {
            self.phase -= wrap;
        }
        (self.phase >> Q16_SHIFT) as usize
    }

    pub fn frequency(&self) -> ScaledHz {
        self.frequency
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }
}

/// The Q16 phase at which a table of `table_len` samples wraps around.
pub fn wrap_limit(table_len: usize) -> u32 {
    (table_len as u32) << Q16_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::hz_to_scaled;

    const TABLE_LEN: usize = 1000;
    const RATE: u32 = 20000;

    #[test]
    fn test_phase_stays_in_range() {
        for hz in [1, 440, 4321, 9999, 19999, 25000].iter() {
            let mut oscillator = Oscillator::new();
            oscillator.set_frequency(hz_to_scaled(*hz), TABLE_LEN, RATE);
            assert!(oscillator.step() < wrap_limit(TABLE_LEN));
            for _ in 0..10000 {
                let index = oscillator.advance(TABLE_LEN);
                assert!(oscillator.phase() < wrap_limit(TABLE_LEN));
                assert!(index < TABLE_LEN);
            }
        }
    }

    #[test]
    fn test_long_run_frequency() {
        let seconds = 10;
        for frequency in [4_400_000_u64, 2_616_300, 10_005_000, 79_021_300].iter() {
            let mut oscillator = Oscillator::new();
            oscillator.set_frequency(*frequency, TABLE_LEN, RATE);
            let mut cycles = 0;
            let mut previous_phase = oscillator.phase();
            for _ in 0..(seconds * RATE) {
                oscillator.advance(TABLE_LEN);
                if oscillator.phase() < previous_phase {
                    cycles += 1;
                }
                previous_phase = oscillator.phase();
            }
            let measured = cycles as f64 / seconds as f64;
            let expected = *frequency as f64 / 10_000.0;
            assert!((measured - expected).abs() <= 0.2);
        }
    }

    #[test]
    fn test_zero_frequency_resets_phase() {
        let mut oscillator = Oscillator::new();
        oscillator.set_frequency(hz_to_scaled(440), TABLE_LEN, RATE);
        for _ in 0..17 {
            oscillator.advance(TABLE_LEN);
        }
        assert!(oscillator.phase() > 0);
        oscillator.set_frequency(0, TABLE_LEN, RATE);
        assert_eq!(oscillator.phase(), 0);
        for _ in 0..100 {
            assert_eq!(oscillator.advance(TABLE_LEN), 0);
        }
    }

    #[test]
    fn test_retune_keeps_phase() {
        let mut oscillator = Oscillator::new();
        oscillator.set_frequency(hz_to_scaled(440), TABLE_LEN, RATE);
        oscillator.advance(TABLE_LEN);
        let phase = oscillator.phase();
        oscillator.set_frequency(hz_to_scaled(880), TABLE_LEN, RATE);
        assert_eq!(oscillator.phase(), phase);
        assert_eq!(oscillator.step(), 44 << 16);
    }
}
