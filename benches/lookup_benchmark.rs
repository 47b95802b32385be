use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slimbook::backlight::{format_channel, parse_channel};

pub fn bench_lookup(c: &mut Criterion) {
    c.bench_function("lookup_hit", |b| {
        b.iter(|| slimbook::lookup(black_box("HERO-RPL-RTX"), black_box("SLIMBOOK")))
    });
    c.bench_function("lookup_miss", |b| {
        b.iter(|| slimbook::lookup(black_box("Standard PC"), black_box("QEMU")))
    });
}

pub fn bench_channels(c: &mut Criterion) {
    c.bench_function("format_channel", |b| b.iter(|| format_channel(black_box(0x1b))));
    c.bench_function("parse_channel", |b| b.iter(|| parse_channel(black_box("0x1b"))));
}

criterion_group!(benches, bench_lookup, bench_channels);
criterion_main!(benches);
