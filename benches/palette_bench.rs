// Palette Benchmarks
// Performance benchmarks for shade decoding and RGB conversion

use criterion::{criterion_group, criterion_main, Criterion};
use gb_frontend::display::{map_frame, shade_to_color, FrameBuffer, RgbFrame, Shade, SCREEN_SIZE};
use std::hint::black_box;

/// Shade codes cycling through all four shades
fn striped_codes() -> Vec<u8> {
    (0..SCREEN_SIZE).map(|i| (i % 4) as u8).collect()
}

/// Benchmark full-frame conversion, the per-tick presentation cost
fn bench_map_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    group.bench_function("decode_codes", |b| {
        let codes = striped_codes();
        b.iter(|| black_box(FrameBuffer::from_codes(black_box(&codes))));
    });

    group.bench_function("map_frame", |b| {
        let frame = FrameBuffer::from_codes(&striped_codes());
        b.iter(|| black_box(map_frame(black_box(&frame))));
    });

    group.bench_function("to_rgba", |b| {
        let frame = map_frame(&FrameBuffer::from_codes(&striped_codes()));
        let mut rgba = vec![0u8; SCREEN_SIZE * 4];
        b.iter(|| {
            frame.to_rgba(&mut rgba);
            black_box(&rgba);
        });
    });

    group.finish();
}

/// Benchmark single lookups
fn bench_shade_lookup(c: &mut Criterion) {
    c.bench_function("shade_to_color", |b| {
        b.iter(|| {
            for shade in Shade::ALL {
                black_box(shade_to_color(black_box(shade)));
            }
        });
    });

    c.bench_function("blank_rgb_frame", |b| {
        b.iter(|| black_box(RgbFrame::default()));
    });
}

criterion_group!(benches, bench_map_frame, bench_shade_lookup);
criterion_main!(benches);
