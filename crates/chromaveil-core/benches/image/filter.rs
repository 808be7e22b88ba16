use criterion::{criterion_group, criterion_main, Criterion};
use chromaveil_core::{filter, DeficiencyKind, Pixel};

pub fn color_filter(c: &mut Criterion) {
    let pixels: Vec<Pixel> = (0..512 * 512)
        .map(|i: u32| Pixel::Rgb(i as u8, (i >> 8) as u8, (i >> 16) as u8))
        .collect();

    c.bench_function("Color Filter red 512x512", |b| {
        b.iter(|| filter(&pixels, DeficiencyKind::Red).expect("Failed to filter pixels"))
    });
}

criterion_group!(benches, color_filter);
criterion_main!(benches);
