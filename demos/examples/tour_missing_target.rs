// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A step whose target never mounts still shows, centered, after the lookup budget is spent.

use std::time::Duration;

use guidepost_demos::{ConsolePage, init_tracing, print_frame};
use guidepost_tour::{MemoryStore, Registry, Tour, TourStep};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let registry = Registry::new(vec![
        TourStep::new("beta", "/", "#beta-feature")
            .title("Coming soon")
            .body("This feature is not enabled for your account yet."),
    ])?;
    let mut tour = Tour::new(registry, ConsolePage::new("/"), MemoryStore::new());
    let budget = tour.config().resolution_budget();

    tour.start();
    print_frame(&tour);
    while !tour.is_ready() {
        tour.tick(Duration::from_millis(50));
    }
    println!(
        "gave up after {} lookups at {:?} (budget {:?})",
        tour.resolve_attempts(),
        tour.now(),
        budget
    );
    print_frame(&tour);
    tour.close();
    Ok(())
}
