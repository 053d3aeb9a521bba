//! Runs the tuner against a simulated singer and prints what the device
//! would show and play. Set `RUST_LOG=debug` to see every analysis.

use env_logger::Env;
use log::info;

use microtune::acquisition::{AnalogInput, SampleRing, Sampler};
use microtune::config::BUFFER_SIZE;
use microtune::display::NoteDisplay;
use microtune::synth::{Synthesizer, Wavetable, DAC_MIDPOINT};
use microtune::{Tuner, TunerConfig, TuningCell};

/// A slightly out of tune voice. A frequency of 0 is silence.
struct Voice {
    frequency: f32,
    sample_rate: f32,
    phase: f32,
}

impl AnalogInput for Voice {
    fn is_conversion_complete(&mut self) -> bool {
        true
    }

    fn read_conversion(&mut self) -> u16 {
        if self.frequency == 0.0 {
            return 0;
        }
        self.phase = (self.phase + self.frequency / self.sample_rate).fract();
        let value = (2.0 * std::f32::consts::PI * self.phase).sin();
        (2048.0 + 1800.0 * value) as u16
    }
}

/// Prints display updates when they change.
#[derive(Default)]
struct LogDisplay {
    note: String,
    frequencies: String,
}

impl NoteDisplay for LogDisplay {
    fn show_note(&mut self, message: &str) {
        if self.note != message {
            info!("segment display: {}", message);
            self.note = message.to_string();
        }
    }

    fn show_frequencies(&mut self, input: &str, output: &str) {
        let frequencies = format!("{} | {}", input, output);
        if self.frequencies != frequencies {
            info!("character display: {}", frequencies);
            self.frequencies = frequencies;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = TunerConfig::default();
    let tuning = TuningCell::new();
    let mut ring: SampleRing<BUFFER_SIZE> = SampleRing::new();
    let (producer, consumer) = ring.split();

    let voice = Voice {
        frequency: 0.0,
        sample_rate: config.sample_rate as f32,
        phase: 0.0,
    };
    let mut sampler = Sampler::new(voice, producer, config.conversion_spin_limit);
    let mut tuner = Tuner::new(&config, consumer, &tuning).unwrap();
    let mut synth: Synthesizer<2> = Synthesizer::new(
        config.synthesis_rate,
        Wavetable::sine(config.wavetable_len),
        config.volume,
    );
    let mut display = LogDisplay::default();

    // Sung frequency and duration in seconds.
    let performance = [(452.0, 1), (296.0, 1), (0.0, 1), (1975.0, 1), (9500.0, 1)];

    for (frequency, seconds) in performance.iter() {
        info!("singing {} Hz", frequency);
        sampler.adc().frequency = *frequency;

        let mut previous = DAC_MIDPOINT as u16;
        let mut crossings = 0;
        let mut synthesis_credit = 0;
        for _ in 0..config.sample_rate * seconds {
            if let Err(err) = sampler.on_tick() {
                info!("acquisition: {}", err);
            }

            // Interleave the slower synthesis interrupt.
            synthesis_credit += config.synthesis_rate;
            while synthesis_credit >= config.sample_rate {
                synthesis_credit -= config.sample_rate;
                let code = synth.on_tick(&tuning, &mut |_: u16| {});
                if previous < DAC_MIDPOINT as u16 && code >= DAC_MIDPOINT as u16 {
                    crossings += 1;
                }
                previous = code;
            }

            let _ = tuner.poll(&mut display);
        }
        info!(
            "played about {} Hz ({} buffers dropped so far)",
            crossings / seconds,
            tuner.dropped_frames()
        );
    }
}
