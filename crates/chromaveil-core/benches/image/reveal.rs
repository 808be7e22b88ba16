use criterion::{criterion_group, criterion_main, Criterion};
use chromaveil_core::{reveal, ImageMode, Pixel};

pub fn hidden_image_reveal(c: &mut Criterion) {
    let rgb: Vec<Pixel> = (0..512 * 512)
        .map(|i: u32| Pixel::Rgb(i as u8, (i >> 8) as u8, (i >> 16) as u8))
        .collect();
    let gray: Vec<Pixel> = (0..512 * 512).map(|i: u32| Pixel::Gray(i as u8)).collect();

    c.bench_function("Reveal RGB 512x512", |b| {
        b.iter(|| reveal(&rgb, &ImageMode::Rgb).expect("Failed to reveal"))
    });
    c.bench_function("Reveal Gray 512x512", |b| {
        b.iter(|| reveal(&gray, &ImageMode::Luma).expect("Failed to reveal"))
    });
}

criterion_group!(benches, hidden_image_reveal);
criterion_main!(benches);
