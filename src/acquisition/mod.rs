//! Interrupt driven sampling into a ping-pong pair of fixed size buffers.
//!
//! [`Sampler::on_tick`] is meant to be called from the acquisition timer
//! interrupt. It pushes one conversion into the [`SampleRing`] through its
//! [`Producer`] half, while the foreground loop claims completed buffers
//! through the [`Consumer`] half.

mod sample_ring;
mod sampler;

pub use sample_ring::{Consumer, FullBuffer, Producer, SampleRing};
pub use sampler::{AnalogInput, Sampler};
