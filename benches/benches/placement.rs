// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use guidepost_placement::{Anchor, PlacementConfig};
use kurbo::{Rect, Size};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Targets scattered over the viewport, including ones hugging every edge.
fn gen_targets(count: usize, viewport: Size) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let w = 20.0 + rng.next_f64() * 300.0;
            let h = 16.0 + rng.next_f64() * 120.0;
            let x0 = rng.next_f64() * (viewport.width - w);
            let y0 = rng.next_f64() * (viewport.height - h);
            Rect::new(x0, y0, x0 + w, y0 + h)
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let callout = Size::new(320.0, 180.0);
    let config = PlacementConfig::default();
    let targets = gen_targets(1024, viewport);

    let mut group = c.benchmark_group("place");
    group.throughput(Throughput::Elements(targets.len() as u64));
    for anchor in Anchor::ALL {
        group.bench_function(anchor.as_str(), |b| {
            b.iter(|| {
                for t in &targets {
                    black_box(config.place(Some(*t), anchor, viewport, callout));
                }
            });
        });
    }
    group.bench_function("oversized_callout", |b| {
        let huge = Size::new(1600.0, 1000.0);
        b.iter(|| {
            for t in &targets {
                black_box(config.place(Some(*t), Anchor::Bottom, viewport, huge));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
