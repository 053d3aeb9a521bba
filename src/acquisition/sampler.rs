use crate::acquisition::sample_ring::Producer;
use crate::error::{Error, Result};

/// A single channel ADC running in continuous conversion mode.
pub trait AnalogInput {
    /// True once the current conversion has finished.
    fn is_conversion_complete(&mut self) -> bool;
    /// Reads the most recent conversion result.
    fn read_conversion(&mut self) -> u16;
}

/// The acquisition interrupt: moves one ADC conversion into the sample ring
/// per timer tick.
pub struct Sampler<'a, A: AnalogInput, const N: usize> {
    adc: A,
    producer: Producer<'a, N>,
    spin_limit: u32,
}

impl<'a, A: AnalogInput, const N: usize> Sampler<'a, A, N> {
    /// # Panics
    ///
    /// If `spin_limit` is zero.
    pub fn new(adc: A, producer: Producer<'a, N>, spin_limit: u32) -> Self {
        if spin_limit == 0 {
            panic!("Conversion spin limit must be greater than 0")
        }
        Sampler {
            adc,
            producer,
            spin_limit,
        }
    }

    /// Call once per acquisition tick. Waits at most `spin_limit` polls for
    /// the conversion to complete. On timeout the tick is dropped, counted
    /// and reported instead of stalling the interrupt.
    pub fn on_tick(&mut self) -> Result<u16> {
        let mut polls = 0;
        while !self.adc.is_conversion_complete() {
            polls += 1;
            if polls >= self.spin_limit {
                self.producer.record_missed_conversion();
                return Err(Error::ConversionTimeout { polls });
            }
        }
        let sample = self.adc.read_conversion();
        self.producer.push(sample);
        Ok(sample)
    }

    pub fn adc(&mut self) -> &mut A {
        &mut self.adc
    }

    pub fn write_index(&self) -> usize {
        self.producer.write_index()
    }
}
