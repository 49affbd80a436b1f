use chromix_core::{parse_computed_color, parse_hex};
use chromix_mix::{MixRatio, MixRequest, Mixer, PresetCatalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_mix(c: &mut Criterion) {
    let mixer = Mixer::approximate();
    let request = MixRequest::default().with_ratio(MixRatio::clamped(37));

    c.bench_function("parse_hex", |b| b.iter(|| parse_hex(black_box("#2448A6"))));
    c.bench_function("parse_computed_color", |b| {
        b.iter(|| parse_computed_color(black_box("rgb(141 128 116 / 50%)")))
    });
    c.bench_function("mix_and_readout", |b| {
        b.iter(|| mixer.mix(black_box(&request)).readout())
    });
    c.bench_function("expression", |b| b.iter(|| black_box(&request).expression()));
    c.bench_function("builtin_catalog", |b| b.iter(PresetCatalog::builtin));
}

criterion_group!(benches, bench_mix);
criterion_main!(benches);
