// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use guidepost_tour::{Dom, MemoryStore, Registry, Router, Tour, TourStep, Viewport};
use kurbo::{Rect, Size};

/// Every step lives on its own route; targets mount after a few lookups.
struct Page {
    route: String,
    pending: Option<String>,
    lookups: Cell<u32>,
    mounts_after: u32,
}

impl Router for Page {
    fn navigate(&mut self, route: &str) {
        self.pending = Some(route.to_owned());
    }
    fn current_route(&self) -> &str {
        &self.route
    }
}

impl Dom for Page {
    type Element = u32;
    fn query_selector(&self, _selector: &str) -> Option<u32> {
        let n = self.lookups.get() + 1;
        self.lookups.set(n);
        (n % (self.mounts_after + 1) == 0).then_some(n)
    }
    fn bounding_rect(&self, element: &u32) -> Rect {
        let y = f64::from(*element % 600);
        Rect::new(100.0, y, 400.0, y + 48.0)
    }
    fn scroll_into_view(&mut self, _: &u32) {}
    fn scroll_to_origin(&mut self) {}
}

impl Viewport for Page {
    fn viewport_size(&self) -> Size {
        Size::new(1280.0, 800.0)
    }
    fn set_resize_listener(&mut self, _: bool) {}
}

fn registry(steps: usize) -> Registry {
    let steps = (0..steps)
        .map(|i| TourStep::new(format!("s{i}"), format!("/page/{i}"), format!("#t{i}")))
        .collect();
    Registry::new(steps).expect("generated ids are unique")
}

/// Open the tour and walk it to completion, ticking at 60 Hz.
fn walk(tour: &mut Tour<Page, MemoryStore>) {
    let frame = Duration::from_micros(16_667);
    tour.start();
    while tour.state().is_open() {
        if let Some(route) = tour.host_mut().pending.take() {
            tour.host_mut().route.clone_from(&route);
            tour.on_route_changed(&route);
        }
        tour.tick(frame);
        if tour.is_ready() {
            black_box(tour.frame(Size::new(320.0, 180.0)));
            tour.advance();
        }
    }
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_walk");
    for &(steps, mounts_after) in &[(16usize, 0u32), (16, 3), (128, 3)] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(format!("steps{steps}_mount_after{mounts_after}"), |b| {
            b.iter_batched(
                || {
                    let page = Page {
                        route: "/".into(),
                        pending: None,
                        lookups: Cell::new(0),
                        mounts_after,
                    };
                    Tour::new(registry(steps), page, MemoryStore::new())
                },
                |mut tour| walk(&mut tour),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
