use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wcag_contrast::{suggest_alternative, Color, ContrastReport, DEFAULT_TARGET_RATIO};

fn parse_hex(c: &mut Criterion) {
    c.bench_function("parse_hex", |b| {
        b.iter(|| black_box("#8A9A5B").parse::<Color>())
    });
}

fn contrast_report(c: &mut Criterion) {
    let foreground = Color::from_rgb(0x8a, 0x9a, 0x5b);
    let background = Color::from_rgb(0xfa, 0xfa, 0xf5);

    c.bench_function("contrast_ratio", |b| {
        b.iter(|| black_box(foreground).contrast_ratio(black_box(&background)))
    });
    c.bench_function("suggest_alternative", |b| {
        b.iter(|| suggest_alternative(&foreground, &background, black_box(DEFAULT_TARGET_RATIO)))
    });
    c.bench_function("contrast_report", |b| {
        b.iter(|| ContrastReport::new(black_box(foreground), background, DEFAULT_TARGET_RATIO))
    });
}

criterion_group!(benches, parse_hex, contrast_report);
criterion_main!(benches);
