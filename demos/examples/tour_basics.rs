// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a three-route tour loaded from JSON, switching language halfway.
//!
//! Run with `RUST_LOG=guidepost_tour=trace` to watch every lookup.

use std::time::Duration;

use guidepost_demos::{ConsolePage, init_tracing, print_frame, pump};
use guidepost_tour::{Language, MemoryStore, Registry, Tour};
use kurbo::{Rect, Size};

const CATALOG: &str = r##"[
  {
    "id": "welcome",
    "route": "/",
    "selector": "#logo",
    "anchor": "right",
    "title": { "en": "Welcome", "es": "Bienvenido" },
    "body": { "en": "This is your dashboard.", "es": "Este es tu panel." }
  },
  {
    "id": "chart",
    "route": "/data",
    "selector": "#chart",
    "title": { "en": "Your data", "es": "Tus datos" },
    "body": { "en": "Charts load lazily.", "es": "Los graficos cargan tarde." }
  },
  {
    "id": "plans",
    "route": "/pricing",
    "selector": ".plans",
    "anchor": "top",
    "scroll_to_top": true,
    "title": { "en": "Plans", "es": "Planes" },
    "body": { "en": "Pick one when you are ready.", "es": "Elige uno cuando quieras." }
  }
]"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let registry = Registry::from_json(CATALOG)?;
    let page = ConsolePage::new("/")
        .element("/", "#logo", Rect::new(24.0, 16.0, 160.0, 56.0), 0)
        .element("/data", "#chart", Rect::new(80.0, 120.0, 900.0, 520.0), 4)
        .element("/pricing", ".plans", Rect::new(200.0, 560.0, 1080.0, 760.0), 0);
    let mut tour = Tour::new(registry, page, MemoryStore::new());

    tour.mount();
    let frame = Duration::from_millis(16);
    let mut shown = 0;
    while tour.state().is_open() {
        pump(&mut tour);
        tour.tick(frame);
        if !tour.is_ready() {
            continue;
        }
        print_frame(&tour);
        shown += 1;
        if shown == 2 {
            tour.set_language(Language::Spanish);
            tour.host_mut().resize(Size::new(1024.0, 700.0));
            tour.on_resize();
            print_frame(&tour);
        }
        tour.advance();
    }

    print_frame(&tour);
    println!("mount again opens: {}", tour.mount());
    Ok(())
}
