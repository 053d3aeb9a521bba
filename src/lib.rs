//! A `no_std` pitch correction core for small microcontrollers.
//!
//! An acquisition interrupt fills ping-pong buffers with ADC samples, the
//! foreground loop finds the dominant frequency of every full buffer with an
//! FFT and snaps it to the nearest note of a 9 octave equal tempered table,
//! and a synthesis interrupt plays the corrected note through a DAC using a
//! wavetable oscillator.
//!
//! Features
//! * Interrupt side code never allocates, blocks or spins without bound.
//! * Integer fixed point arithmetic for frequencies and oscillator phase.
//! * Hardware access through small traits ([`acquisition::AnalogInput`],
//! [`synth::AnalogOutput`], [`display::NoteDisplay`]).
//!
//! # Examples
//!
//! Wiring the components together. On a device `sampler.on_tick()` and
//! `synth.on_tick(..)` are called from timer interrupts and `tuner.run(..)`
//! from `main`.
//!
//! ```
//! use microtune::acquisition::{AnalogInput, SampleRing, Sampler};
//! use microtune::config::{BUFFER_SIZE, SYNTHESIS_RATE, VOLUME, WAVETABLE_LEN};
//! use microtune::synth::{Synthesizer, Wavetable};
//! use microtune::{Tuner, TunerConfig, TuningCell};
//!
//! struct Silence;
//!
//! impl AnalogInput for Silence {
//!     fn is_conversion_complete(&mut self) -> bool {
//!         true
//!     }
//!     fn read_conversion(&mut self) -> u16 {
//!         0
//!     }
//! }
//!
//! let config = TunerConfig::default();
//! let tuning = TuningCell::new();
//! let mut ring: SampleRing<BUFFER_SIZE> = SampleRing::new();
//! let (producer, consumer) = ring.split();
//!
//! let mut sampler = Sampler::new(Silence, producer, config.conversion_spin_limit);
//! let mut tuner = Tuner::new(&config, consumer, &tuning).unwrap();
//! let mut synth: Synthesizer<2> =
//!     Synthesizer::new(SYNTHESIS_RATE, Wavetable::sine(WAVETABLE_LEN), VOLUME);
//!
//! for _ in 0..BUFFER_SIZE {
//!     sampler.on_tick().unwrap();
//! }
//! let analysis = tuner.poll(&mut ()).unwrap();
//! assert!(analysis.peak.is_silent());
//! assert_eq!(tuning.load(), None);
//! assert_eq!(synth.on_tick(&tuning, &mut |_: u16| {}), synth.tick());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod acquisition;
pub mod autotune;
pub mod common;
pub mod config;
pub mod display;
mod error;
pub mod shared;
pub mod spectrum;
pub mod synth;
pub mod tuner;

pub use config::TunerConfig;
pub use error::{Error, Result};
pub use shared::TuningCell;
pub use tuner::{Analysis, Correction, Phase, Tuner};
