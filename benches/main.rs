use criterion::{black_box, criterion_group, criterion_main, Criterion};
use microtune::autotune::autotune;
use microtune::common::hz_to_scaled;
use microtune::config::{SAMPLE_RATE, SYNTHESIS_RATE, VOLUME, WAVETABLE_LEN};
use microtune::spectrum::{FftKernel, SpectralAnalyzer};
use microtune::synth::{Synthesizer, Wavetable};

fn generate_sine(frequency: f32, sample_count: usize) -> Vec<u16> {
    (0..sample_count)
        .map(|i| {
            let t = (i as f32) / (SAMPLE_RATE as f32);
            (2048.0 + 2000.0 * (2.0 * std::f32::consts::PI * frequency * t).sin()).round() as u16
        })
        .collect()
}

fn run_analyzer_benchmark(id: &str, c: &mut Criterion, fft_size: usize, kernel: FftKernel) {
    let mut analyzer = SpectralAnalyzer::from_options(SAMPLE_RATE, fft_size, kernel);
    let samples = generate_sine(440.0, fft_size);
    c.bench_function(id, |b| {
        b.iter(|| analyzer.analyze(black_box(&samples[..])))
    });
}

fn analyzer_benchmarks(c: &mut Criterion) {
    run_analyzer_benchmark("Recurrence FFT 256", c, 256, FftKernel::Recurrence);
    run_analyzer_benchmark("Exact FFT 256", c, 256, FftKernel::Exact);

    run_analyzer_benchmark("Recurrence FFT 1024", c, 1024, FftKernel::Recurrence);
    run_analyzer_benchmark("Exact FFT 1024", c, 1024, FftKernel::Exact);

    run_analyzer_benchmark("Recurrence FFT 4096", c, 4096, FftKernel::Recurrence);
    run_analyzer_benchmark("Exact FFT 4096", c, 4096, FftKernel::Exact);
}

fn autotune_benchmarks(c: &mut Criterion) {
    c.bench_function("Autotune 20 Hz", |b| {
        b.iter(|| autotune(black_box(hz_to_scaled(20))))
    });
    c.bench_function("Autotune 8000 Hz", |b| {
        b.iter(|| autotune(black_box(hz_to_scaled(8000))))
    });
}

fn synthesis_benchmarks(c: &mut Criterion) {
    let mut synth: Synthesizer<2> =
        Synthesizer::new(SYNTHESIS_RATE, Wavetable::sine(WAVETABLE_LEN), VOLUME);
    synth.set_frequency(0, hz_to_scaled(440));
    synth.set_frequency(1, hz_to_scaled(660));
    c.bench_function("Synthesis tick, 2 channels", |b| {
        b.iter(|| black_box(synth.tick()))
    });
}

criterion_group!(benches, analyzer_benchmarks, autotune_benchmarks, synthesis_benchmarks);
criterion_main!(benches);
