use criterion::{criterion_group, criterion_main, Criterion};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use splashgen::Platform;

pub fn cover_crop_benchmarks(c: &mut Criterion) {
    let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        512,
        512,
        Rgba([90, 120, 40, 255]),
    ));
    c.bench_function("cover_crop_portrait", |b| {
        b.iter(|| source.resize_to_fill(96, 160, FilterType::Lanczos3))
    });
    c.bench_function("cover_crop_landscape", |b| {
        b.iter(|| source.resize_to_fill(160, 96, FilterType::Lanczos3))
    });
}

pub fn resolve_benchmarks(c: &mut Criterion) {
    c.bench_function("resolve_all_splashes", |b| {
        b.iter(|| Platform::All.splashes())
    });
}

criterion_group!(benches, cover_crop_benchmarks, resolve_benchmarks);
criterion_main!(benches);
