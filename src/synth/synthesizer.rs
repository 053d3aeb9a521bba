use crate::common::{ScaledHz, Q16_SHIFT};
use crate::shared::TuningCell;
use crate::synth::oscillator::Oscillator;
use crate::synth::wavetable::Wavetable;

/// The DAC code of a zero output.
pub const DAC_MIDPOINT: i32 = 2048;
/// The largest 12 bit DAC code.
pub const DAC_MAX: u16 = 4095;
/// The mixed and scaled output is shifted down by this many bits.
const OUTPUT_SHIFT: u32 = 17;

/// A single channel 12 bit DAC.
pub trait AnalogOutput {
    fn write(&mut self, code: u16);
}

impl<F: FnMut(u16)> AnalogOutput for F {
    fn write(&mut self, code: u16) {
        self(code)
    }
}

/// Wavetable synthesizer with `C` channels sharing one wavetable.
///
/// [`on_tick`](Synthesizer::on_tick) is meant to be called from the
/// synthesis timer interrupt. It does not allocate and does not block.
pub struct Synthesizer<const C: usize> {
    wavetable: Wavetable,
    oscillators: [Oscillator; C],
    rate: u32,
    volume: i32,
}

impl<const C: usize> Synthesizer<C> {
    /// # Panics
    ///
    /// If there are no channels, `rate` is zero, `volume` is negative or the
    /// wavetable is too long to be addressed by a Q16 phase.
    pub fn new(rate: u32, wavetable: Wavetable, volume: i32) -> Self {
        if C == 0 {
            panic!("A synthesizer needs at least one channel")
        }
        if rate == 0 {
            panic!("Synthesis rate must be greater than 0")
        }
        if volume < 0 {
            panic!("Volume must not be negative")
        }
        if (wavetable.len() as u64) << (Q16_SHIFT + 1) > u32::MAX as u64 {
            panic!("Wavetable of length {} is too long", wavetable.len())
        }
        Synthesizer {
            wavetable,
            oscillators: [Oscillator::new(); C],
            rate,
            volume,
        }
    }

    /// Sets the frequency of one channel. 0 silences the channel.
    ///
    /// # Panics
    ///
    /// If `channel` is not less than `C`.
    pub fn set_frequency(&mut self, channel: usize, frequency: ScaledHz) {
        let table_len = self.wavetable.len();
        self.oscillators[channel].set_frequency(frequency, table_len, self.rate);
    }

    pub fn frequency(&self, channel: usize) -> ScaledHz {
        self.oscillators[channel].frequency()
    }

    pub fn oscillator(&self, channel: usize) -> &Oscillator {
        &self.oscillators[channel]
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.max(0);
    }

    /// Advances all channels by one sample and returns the mixed DAC code.
    pub fn tick(&mut self) -> u16 {
        let table_len = self.wavetable.len();
        let mut sum: i64 = 0;
        for oscillator in self.oscillators.iter_mut() {
            let index = oscillator.advance(table_len);
            sum += self.wavetable[index] as i64;
        }
        let scaled = (sum * self.volume as i64) >> OUTPUT_SHIFT;
        (scaled + DAC_MIDPOINT as i64).clamp(0, DAC_MAX as i64) as u16
    }

    /// The synthesis interrupt body: channel 0 follows the published tuning,
    /// the mixed sample is written to the DAC and returned.
    pub fn on_tick<D: AnalogOutput>(&mut self, tuning: &TuningCell, dac: &mut D) -> u16 {
        self.set_frequency(0, tuning.frequency());
        let code = self.tick();
        dac.write(code);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec::Vec;
    use crate::autotune::{Note, TunedNote};
    use crate::common::hz_to_scaled;

    const RATE: u32 = 20000;

    fn synthesizer() -> Synthesizer<2> {
        Synthesizer::new(RATE, Wavetable::sine(1000), 2048)
    }

    // Counts upward crossings of `level` in a sequence of DAC codes.
    fn rising_crossings(codes: &[u16], level: u16) -> usize {
        codes
            .windows(2)
            .filter(|pair| pair[0] < level && pair[1] >= level)
            .count()
    }

    struct RecordingDac {
        codes: Vec<u16>,
    }

    impl AnalogOutput for RecordingDac {
        fn write(&mut self, code: u16) {
            self.codes.push(code);
        }
    }

    #[test]
    fn test_silence_is_constant() {
        let mut synth = synthesizer();
        let idle = synth.tick();
        synth.set_frequency(0, hz_to_scaled(440));
        for _ in 0..123 {
            synth.tick();
        }
        synth.set_frequency(0, 0);
        for _ in 0..1000 {
            assert_eq!(synth.tick(), idle);
        }
        assert_eq!(synth.oscillator(0).phase(), 0);
    }

    #[test]
    fn test_output_frequency() {
        let mut synth = synthesizer();
        let idle = synth.tick();
        synth.set_frequency(0, hz_to_scaled(440));
        let codes: Vec<u16> = (0..RATE).map(|_| synth.tick()).collect();
        let crossings = rising_crossings(&codes, idle);
        assert!((crossings as i32 - 440).abs() <= 1);
    }

    #[test]
    fn test_output_range() {
        let mut synth = synthesizer();
        synth.set_frequency(0, hz_to_scaled(440));
        synth.set_frequency(1, hz_to_scaled(660));
        let mut min = DAC_MAX;
        let mut max = 0;
        for _ in 0..RATE {
            let code = synth.tick();
            min = min.min(code);
            max = max.max(code);
        }
        // Two full scale channels at volume 2048 span half the DAC range.
        assert!(min >= 1024 && max <= 3072);
        assert!(max - min > 1500);

        synth.set_volume(1 << 20);
        for _ in 0..RATE {
            assert!(synth.tick() <= DAC_MAX);
        }
    }

    #[test]
    fn test_follows_tuning_cell() {
        let mut synth = synthesizer();
        let cell = TuningCell::new();
        let mut dac = RecordingDac { codes: Vec::new() };

        synth.on_tick(&cell, &mut dac);
        assert_eq!(synth.frequency(0), 0);

        cell.publish(Some(TunedNote { note: Note::A, octave: 4 }));
        synth.on_tick(&cell, &mut dac);
        assert_eq!(synth.frequency(0), 4_400_000);
        assert_eq!(synth.oscillator(0).step(), 22 << 16);

        cell.publish(None);
        synth.on_tick(&cell, &mut dac);
        assert_eq!(synth.frequency(0), 0);
        assert_eq!(dac.codes.len(), 3);
    }

    #[test]
    #[should_panic]
    fn test_channel_out_of_range() {
        let mut synth = synthesizer();
        synth.set_frequency(2, 1);
    }
}
