// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_windowing::{Item, ViewportConfig, ViewportEngine, ViewportMode};

const VIEWPORT: f64 = 600.0;

fn engine(mode: ViewportMode, len: usize) -> ViewportEngine<usize> {
    let mut engine = ViewportEngine::with_config(
        ViewportConfig::default()
            .with_mode(mode)
            .with_default_item_size(24.0),
    )
    .expect("valid config");
    // Sizes cycle through 12..60 so variable mode is genuinely non-uniform.
    engine
        .set_items(
            (0..len)
                .map(|i| Item::with_size(i, 12.0 + (i % 5) as f64 * 12.0))
                .collect(),
        )
        .expect("valid sizes");
    engine.set_viewport_size(VIEWPORT).expect("valid viewport");
    engine
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/scroll");

    // Hypothesis: a scroll tick costs O(1) in fixed mode and O(log n) in
    // variable mode, independent of list length beyond the logarithm.
    for len in [1_000_usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(64));
        for mode in [ViewportMode::Fixed, ViewportMode::Variable] {
            let mut e = engine(mode, len);
            let max = e.window().max_scroll();
            group.bench_with_input(BenchmarkId::new(mode.as_str(), len), &max, |b, max| {
                b.iter(|| {
                    for step in 0..64 {
                        let pos = max * f64::from(step) / 64.0;
                        e.set_scroll_position(black_box(pos)).expect("finite");
                    }
                    black_box(e.window().end_index);
                });
            });
        }
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/measure");

    // Point updates versus a full rebuild after each measurement.
    for len in [1_000_usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("set_item_size", len), &len, |b, &len| {
            let mut e = engine(ViewportMode::Auto, len);
            let mut i = 0;
            b.iter(|| {
                i = (i + 7919) % len;
                e.set_item_size(i, Some(black_box(30.0))).expect("in range");
            });
        });
        group.bench_with_input(BenchmarkId::new("refresh", len), &len, |b, &len| {
            let mut e = engine(ViewportMode::Auto, len);
            let mut i = 0;
            b.iter(|| {
                i = (i + 7919) % len;
                e.items_mut()[i].size = Some(black_box(30.0));
                e.refresh();
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_scroll, bench_measure
}
criterion_main!(benches);
