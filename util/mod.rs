#![allow(dead_code)]

use palette::Srgb;
use std::sync::OnceLock;

/// Deterministic pixels spread around a handful of cluster centers, roughly how
/// photographs distribute their colors.
fn clustered_pixels(len: usize, seed: u32) -> Vec<Srgb<u8>> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state
    };

    let centers = (0..32)
        .map(|_| [next() >> 24, next() >> 24, next() >> 24])
        .collect::<Vec<_>>();

    (0..len)
        .map(|_| {
            let center = centers[(next() >> 27) as usize];
            let mut channel = |c: u32| {
                let jitter = (next() >> 27) as i32 - 16;
                (c as i32 + jitter).clamp(0, 255) as u8
            };
            Srgb::new(channel(center[0]), channel(center[1]), channel(center[2]))
        })
        .collect()
}

static BENCHMARK_PIXELS: OnceLock<Vec<(String, Vec<Srgb<u8>>)>> = OnceLock::new();

pub fn benchmark_pixels() -> &'static [(String, Vec<Srgb<u8>>)] {
    BENCHMARK_PIXELS.get_or_init(|| {
        [128u32, 512, 2048]
            .into_iter()
            .map(|side| {
                let name = format!("{side}x{side}");
                (name, clustered_pixels((side * side) as usize, side))
            })
            .collect()
    })
}
