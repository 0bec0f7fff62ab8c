#[path = "../util/mod.rs"]
mod util;

use criterion::{
    Bencher, BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main,
    measurement::WallTime,
};
use mmcq::quantize;
use palette::Srgb;
use std::time::Duration;
use util::benchmark_pixels;

// MMCQ running time is dominated by the histogram pass, so it scales with
// pixel count far more than with palette size.
const K: u16 = 256;

fn bench(
    c: &mut Criterion,
    group: &str,
    mut f: impl FnMut(&mut Bencher<'_, WallTime>, &Vec<Srgb<u8>>),
) {
    let mut group = c.benchmark_group(group);
    group
        .sample_size(30)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for (name, pixels) in benchmark_pixels() {
        group.bench_with_input(BenchmarkId::from_parameter(name), pixels, &mut f);
    }
}

fn mmcq_palette(c: &mut Criterion) {
    bench(c, "mmcq_palette", |b, pixels| {
        b.iter(|| quantize(pixels, K).unwrap().into_palette())
    })
}

fn mmcq_small_palette(c: &mut Criterion) {
    bench(c, "mmcq_small_palette", |b, pixels| {
        b.iter(|| quantize(pixels, 16).unwrap().into_palette())
    })
}

fn mmcq_remap(c: &mut Criterion) {
    bench(c, "mmcq_remap", |b, pixels| {
        let color_map = quantize(pixels, K).unwrap();
        b.iter(|| {
            let mut quantized = pixels.clone();
            color_map.map_slice_in_place(&mut quantized);
            quantized
        })
    })
}

criterion_group!(benches, mmcq_palette, mmcq_small_palette, mmcq_remap);
criterion_main!(benches);
