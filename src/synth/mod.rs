//! Wavetable resynthesis with Q16 phase accumulators.
//!
//! ```
//! use microtune::synth::{Synthesizer, Wavetable};
//!
//! let mut synth: Synthesizer<2> = Synthesizer::new(20000, Wavetable::sine(1000), 2048);
//! // Channel 0 plays A4, channel 1 stays silent.
//! synth.set_frequency(0, 4_400_000);
//! let code = synth.tick();
//! assert!(code <= 4095);
//! ```

mod oscillator;
mod synthesizer;
mod wavetable;

pub use oscillator::{wrap_limit, Oscillator};
pub use synthesizer::{AnalogOutput, Synthesizer, DAC_MAX, DAC_MIDPOINT};
pub use wavetable::Wavetable;
