// Copyright 2025 the Guidepost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigate → resolve → measure scenarios against a scripted page.

mod support;

use guidepost_tour::{
    Anchor, Direction, MemoryStore, Overlay, Phase, Side, StepFlags, TourConfig, TourStep,
};
use kurbo::{Rect, Size};
use support::{FakePage, arrive, ms, run_for, tour, tour_with};

const CALLOUT: Size = Size::new(320.0, 180.0);

fn chart() -> Rect {
    Rect::new(100.0, 100.0, 300.0, 160.0)
}

fn price_table() -> Rect {
    Rect::new(200.0, 200.0, 400.0, 260.0)
}

#[test]
fn cross_route_tour_navigates_waits_and_resolves() {
    let page = FakePage::new("/other")
        .with("/data", ".a", chart())
        .with_late("/pricing", ".b", price_table(), 3);
    let mut t = tour(
        vec![
            TourStep::new("data", "/data", ".a"),
            TourStep::new("pricing", "/pricing", ".b"),
        ],
        page,
    );

    t.start();
    assert_eq!(t.host().navigations, ["/data"]);
    assert_eq!(t.state().pending_navigation_target(), Some("/data"));
    assert_eq!(t.state().target_rect(), None);
    assert_eq!(t.phase(), Phase::Navigating);
    assert!(!t.is_ready());

    arrive(&mut t);
    assert!(!t.is_navigating());
    t.tick(ms(99));
    assert_eq!(t.host().queries(".a"), 0, "lookup waits for the arrival settle delay");
    t.tick(ms(1));
    assert_eq!(t.host().queries(".a"), 1);
    assert_eq!(t.state().target_rect(), Some(chart()));
    assert!(t.is_ready());

    t.advance();
    assert_eq!(t.host().navigations, ["/data", "/pricing"]);
    assert_eq!(t.state().target_rect(), None);
    assert!(t.is_navigating());

    arrive(&mut t);
    t.tick(ms(100));
    t.tick(ms(150));
    t.tick(ms(150));
    assert_eq!(t.host().queries(".b"), 3);
    assert_eq!(t.state().target_rect(), None);
    assert_eq!(t.phase(), Phase::Resolving);

    t.tick(ms(150));
    assert_eq!(t.host().queries(".b"), 4);
    assert_eq!(t.state().target_rect(), Some(price_table()));
    assert!(t.is_ready());
}

#[test]
fn missing_target_gives_up_after_fifteen_lookups() {
    let mut t = tour(
        vec![TourStep::new("ghost", "/", ".missing").title("Still here")],
        FakePage::new("/"),
    );

    t.start();
    assert_eq!(t.host().queries(".missing"), 1);

    t.tick(ms(2099));
    assert_eq!(t.host().queries(".missing"), 14);
    assert!(!t.is_ready());

    t.tick(ms(1));
    assert_eq!(t.host().queries(".missing"), 15);
    assert!(t.is_ready());
    assert_eq!(t.state().target_rect(), None);

    run_for(&mut t, ms(2000));
    assert_eq!(t.host().queries(".missing"), 15);
    assert_eq!(t.pending_timers(), 0);

    let frame = t.frame(CALLOUT).expect("open");
    assert_eq!(frame.title, "Still here");
    assert_eq!(frame.overlay, Overlay::Dim);
    assert_eq!(frame.callout.side, None);
    assert_eq!(frame.callout.origin, kurbo::Point::new(480.0, 310.0));
}

#[test]
fn advancing_cancels_the_previous_lookup() {
    let page = FakePage::new("/")
        .with_late("/", ".slow", chart(), 100)
        .with("/", ".fast", price_table());
    let mut t = tour(
        vec![
            TourStep::new("slow", "/", ".slow"),
            TourStep::new("fast", "/", ".fast"),
        ],
        page,
    );

    t.start();
    t.tick(ms(150));
    assert_eq!(t.host().queries(".slow"), 2);

    t.advance();
    assert_eq!(t.state().target_rect(), Some(price_table()));

    run_for(&mut t, ms(3000));
    assert_eq!(t.host().queries(".slow"), 2);
    assert_eq!(t.state().target_rect(), Some(price_table()));
}

#[test]
fn advancing_mid_navigation_resolves_the_live_step() {
    let page = FakePage::new("/other")
        .with("/pricing", ".a", chart())
        .with("/pricing", ".b", price_table());
    let mut t = tour(
        vec![
            TourStep::new("a", "/pricing", ".a"),
            TourStep::new("b", "/pricing", ".b"),
        ],
        page,
    );

    t.start();
    t.advance();
    assert_eq!(t.state().current_step_index(), 1);
    assert_eq!(t.state().pending_navigation_target(), Some("/pricing"));

    arrive(&mut t);
    t.tick(ms(100));
    assert_eq!(t.host().queries(".a"), 0);
    assert_eq!(t.host().queries(".b"), 1);
    assert_eq!(t.state().target_rect(), Some(price_table()));
}

#[test]
fn arrival_at_an_abandoned_route_is_ignored() {
    let page = FakePage::new("/")
        .with("/a", ".a", chart())
        .with("/b", ".b", price_table());
    let mut t = tour(
        vec![TourStep::new("a", "/a", ".a"), TourStep::new("b", "/b", ".b")],
        page,
    );

    t.start();
    t.advance();

    t.host_mut().route = "/a".into();
    t.on_route_changed("/a");
    assert_eq!(t.state().pending_navigation_target(), Some("/b"));
    run_for(&mut t, ms(500));
    assert_eq!(t.host().queries(".a"), 0);
    assert_eq!(t.phase(), Phase::Navigating);

    arrive(&mut t);
    t.tick(ms(100));
    assert_eq!(t.state().target_rect(), Some(price_table()));
}

#[test]
fn retreat_at_first_step_does_nothing() {
    let page = FakePage::new("/").with("/", ".a", chart());
    let mut t = tour(vec![TourStep::new("a", "/", ".a")], page);

    t.start();
    t.retreat();
    assert_eq!(t.state().current_step_index(), 0);
    assert_eq!(t.state().direction(), Direction::Forward);
    assert_eq!(t.host().queries(".a"), 1);
    assert!(t.host().navigations.is_empty());
}

#[test]
fn retreat_navigates_back_with_backward_direction() {
    let page = FakePage::new("/a")
        .with("/a", ".a", chart())
        .with("/b", ".b", price_table());
    let mut t = tour(
        vec![TourStep::new("a", "/a", ".a"), TourStep::new("b", "/b", ".b")],
        page,
    );

    t.start();
    t.advance();
    arrive(&mut t);
    t.tick(ms(100));
    assert_eq!(t.state().target_rect(), Some(price_table()));

    t.retreat();
    assert_eq!(t.state().direction(), Direction::Backward);
    assert_eq!(t.host().navigations, ["/b", "/a"]);
    arrive(&mut t);
    t.tick(ms(100));
    assert_eq!(t.state().target_rect(), Some(chart()));
    assert_eq!(t.frame(CALLOUT).map(|f| f.direction), Some(Direction::Backward));
}

#[test]
fn highlighted_target_is_remeasured_after_scrolling() {
    let below_fold = Rect::new(100.0, 1500.0, 300.0, 1560.0);
    let page = FakePage::new("/").with("/", ".deep", below_fold);
    let mut t = tour(vec![TourStep::new("deep", "/", ".deep")], page);

    t.start();
    assert_eq!(t.state().target_rect(), Some(below_fold));
    assert_eq!(t.host().scrolled_into_view, [".deep"]);

    t.tick(ms(299));
    assert_eq!(t.state().target_rect(), Some(below_fold));
    t.tick(ms(1));
    assert_eq!(
        t.state().target_rect(),
        Some(Rect::new(100.0, 370.0, 300.0, 430.0))
    );
}

#[test]
fn scroll_to_top_steps_skip_scroll_into_view() {
    let page = FakePage::new("/").with("/", ".hero", chart());
    let mut t = tour(
        vec![TourStep::new("hero", "/", ".hero").flags(StepFlags::HIGHLIGHT | StepFlags::SCROLL_TO_TOP)],
        page,
    );
    t.host_mut().scroll_y = 500.0;

    t.start();
    assert_eq!(t.host().scrolled_to_origin, 1);
    assert!(t.host().scrolled_into_view.is_empty());
    assert_eq!(t.pending_timers(), 0);
    assert_eq!(t.state().target_rect(), Some(chart()));
}

#[test]
fn unhighlighted_steps_measure_without_spotlight() {
    let page = FakePage::new("/").with("/", ".menu", chart());
    let mut t = tour(
        vec![TourStep::new("menu", "/", ".menu").flags(StepFlags::empty())],
        page,
    );

    t.start();
    assert!(t.host().scrolled_into_view.is_empty());
    assert_eq!(t.state().target_rect(), Some(chart()));
    let frame = t.frame(CALLOUT).expect("open");
    assert_eq!(frame.overlay, Overlay::Dim);
    assert_eq!(frame.callout.side, Some(Side::Bottom));
}

#[test]
fn resize_remeasures_only_when_settled() {
    let page = FakePage::new("/")
        .with("/", ".a", chart())
        .with("/b", ".b", price_table());
    let mut t = tour(
        vec![TourStep::new("a", "/", ".a"), TourStep::new("b", "/b", ".b")],
        page,
    );

    t.start();
    run_for(&mut t, ms(500));
    let moved = Rect::new(50.0, 120.0, 250.0, 180.0);
    t.host_mut().move_element(".a", moved);
    t.on_resize();
    assert_eq!(t.state().target_rect(), Some(moved));
    assert_eq!(t.host().queries(".a"), 3);
    assert_eq!(t.host().scrolled_into_view.len(), 1);

    t.advance();
    t.on_resize();
    assert_eq!(t.host().queries(".b"), 0);
    assert!(t.is_navigating());
}

#[test]
fn resize_keeps_rect_when_target_vanished() {
    let page = FakePage::new("/").with("/", ".a", chart());
    let mut t = tour(vec![TourStep::new("a", "/", ".a")], page);

    t.start();
    run_for(&mut t, ms(500));
    t.host_mut().unmount(".a");
    t.on_resize();
    assert_eq!(t.state().target_rect(), Some(chart()));
}

#[test]
fn late_arrival_after_retreat_drops_the_old_page_rect() {
    let page = FakePage::new("/a")
        .with("/a", ".a", chart())
        .with("/b", ".b", price_table());
    let mut t = tour(
        vec![TourStep::new("a", "/a", ".a"), TourStep::new("b", "/b", ".b")],
        page,
    );

    t.start();
    t.advance();
    t.retreat();
    assert!(!t.is_navigating());
    assert_eq!(t.state().target_rect(), Some(chart()));

    // The navigation requested for step "b" completes anyway.
    arrive(&mut t);
    assert_eq!(t.host().route, "/b");
    assert_eq!(t.state().target_rect(), None);
    assert!(t.is_ready());

    t.on_resize();
    assert_eq!(t.state().target_rect(), None);
    run_for(&mut t, ms(500));
    assert_eq!(t.state().target_rect(), None);
    assert_eq!(t.frame(CALLOUT).and_then(|f| f.callout.side), None);
}

#[test]
fn missing_target_is_ready_exactly_at_the_resolution_budget() {
    let mut t = tour(
        vec![TourStep::new("ghost", "/", ".missing")],
        FakePage::new("/"),
    );
    let budget = t.config().resolution_budget();
    assert_eq!(budget, ms(2100));

    t.start();
    let started = t.now();
    while !t.is_ready() {
        t.tick(ms(1));
        assert!(t.now() - started <= budget, "still polling past the budget");
    }
    assert_eq!(t.now() - started, budget);
    assert_eq!(t.host().queries(".missing"), t.config().max_attempts);
}

#[test]
fn navigation_timeout_falls_back_to_a_centered_step() {
    let config = TourConfig::default().navigation_timeout(Some(ms(3000)));
    let page = FakePage::new("/").with("/never", ".x", chart());
    let mut t = tour_with(
        vec![TourStep::new("x", "/never", ".x")],
        page,
        MemoryStore::new(),
        config,
    );

    t.start();
    run_for(&mut t, ms(2992));
    assert!(t.is_navigating());
    run_for(&mut t, ms(8));
    assert!(!t.is_navigating());
    assert!(t.is_ready());
    assert_eq!(t.state().target_rect(), None);
    assert_eq!(t.frame(CALLOUT).and_then(|f| f.callout.side), None);

    // A late arrival for the abandoned navigation changes nothing.
    arrive(&mut t);
    run_for(&mut t, ms(500));
    assert_eq!(t.host().queries(".x"), 0);
}

#[test]
fn timely_arrival_disarms_the_navigation_timeout() {
    let config = TourConfig::default().navigation_timeout(Some(ms(3000)));
    let page = FakePage::new("/").with("/data", ".a", chart());
    let mut t = tour_with(
        vec![TourStep::new("a", "/data", ".a")],
        page,
        MemoryStore::new(),
        config,
    );

    t.start();
    run_for(&mut t, ms(1000));
    arrive(&mut t);
    run_for(&mut t, ms(5000));
    assert_eq!(t.state().target_rect(), Some(chart()));
}

#[test]
fn without_timeout_navigation_waits_indefinitely() {
    let mut t = tour(
        vec![TourStep::new("x", "/never", ".x")],
        FakePage::new("/"),
    );

    t.start();
    run_for(&mut t, ms(60_000));
    assert!(t.is_navigating());
    assert_eq!(t.phase(), Phase::Navigating);
    assert_eq!(t.pending_timers(), 0);
}

#[test]
fn frame_places_callout_and_spotlight() {
    let low = Rect::new(600.0, 700.0, 680.0, 740.0);
    let page = FakePage::new("/").with("/", ".low", low);
    let mut t = tour(
        vec![
            TourStep::new("low", "/", ".low").anchor(Anchor::Bottom),
            TourStep::new("next", "/", ".low"),
        ],
        page,
    );
    t.start();
    let frame = t.frame(CALLOUT).expect("open");
    assert_eq!(frame.step_index, 0);
    assert_eq!(frame.step_count, 2);
    assert_eq!(frame.step_id, "low");
    assert!(frame.ready);
    assert!(!frame.navigating);
    assert_eq!(frame.callout.side, Some(Side::Top));
    assert_eq!(frame.overlay, Overlay::Cutout(low.inflate(8.0, 8.0)));
}

#[test]
fn spotlight_glides_between_targets() {
    let page = FakePage::new("/")
        .with("/", ".a", chart())
        .with("/", ".b", price_table());
    let mut t = tour(
        vec![TourStep::new("a", "/", ".a"), TourStep::new("b", "/", ".b")],
        page,
    );

    t.start();
    assert_eq!(
        t.frame(CALLOUT).map(|f| f.overlay),
        Some(Overlay::Cutout(chart().inflate(8.0, 8.0)))
    );

    t.advance();
    t.tick(ms(16));
    let Some(Overlay::Cutout(mid)) = t.frame(CALLOUT).map(|f| f.overlay) else {
        panic!("spotlight should stay visible");
    };
    assert!(mid.x0 > 92.0 && mid.x0 < 192.0, "in flight: {mid:?}");

    run_for(&mut t, ms(3000));
    assert_eq!(
        t.frame(CALLOUT).map(|f| f.overlay),
        Some(Overlay::Cutout(price_table().inflate(8.0, 8.0)))
    );
}
