// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for `ViewportEngine`.
//!
//! These drive the engine the way a host list would: set items, resize, scroll,
//! and ask for items to be made visible, then check the reported window.

use understory_windowing::{
    EnsureVisible, Item, ViewportConfig, ViewportDirection, ViewportEngine, ViewportMode,
    ViewportWindow,
};

fn engine(mode: ViewportMode, default_size: f64) -> ViewportEngine<u32> {
    ViewportEngine::with_config(
        ViewportConfig::default()
            .with_mode(mode)
            .with_default_item_size(default_size),
    )
    .unwrap()
}

fn assert_reconstructs(window: &ViewportWindow, sizes: &[f64]) {
    let visible: f64 = sizes[window.visible_range()].iter().sum();
    assert_eq!(
        window.before_size + visible + window.after_size,
        window.list_size,
        "spacers and visible items must add up to the list size"
    );
}

#[test]
fn fixed_mode_thousand_rows() {
    let mut engine = engine(ViewportMode::Fixed, 20.0);
    engine.set_models(0..1000);
    engine.set_viewport_size(100.0).unwrap();
    engine.set_scroll_position(205.0).unwrap();

    let window = *engine.window();
    assert_eq!(window.start_index, 10);
    assert_eq!(window.end_index, 14);
    assert_eq!(window.before_size, 200.0);
    assert_eq!(window.list_size, 20_000.0);
    assert_eq!(window.after_size, window.list_size - 300.0);
    assert_eq!(window.scroll_pos, 205.0);
    let models: Vec<u32> = engine.visible_items().iter().map(|i| i.model).collect();
    assert_eq!(models, [10, 11, 12, 13, 14]);
}

#[test]
fn variable_mode_mixed_sizes() {
    let sizes = [10.0, 20.0, 30.0, 40.0];
    let mut engine = engine(ViewportMode::Variable, 40.0);
    engine
        .set_items(
            sizes
                .iter()
                .zip(0..)
                .map(|(size, model)| Item::with_size(model, *size))
                .collect(),
        )
        .unwrap();
    engine.set_viewport_size(25.0).unwrap();
    engine.set_scroll_position(15.0).unwrap();

    let window = engine.window();
    assert_eq!((window.start_index, window.end_index), (1, 2));
    assert_eq!(window.before_size, 10.0);
    assert_eq!(window.after_size, 40.0);
    assert_reconstructs(window, &sizes);
}

#[test]
fn empty_list_in_every_mode() {
    for mode in [
        ViewportMode::Disabled,
        ViewportMode::Fixed,
        ViewportMode::Variable,
        ViewportMode::Auto,
    ] {
        let mut engine = engine(mode, 20.0);
        engine.set_models([]);
        engine.set_viewport_size(100.0).unwrap();
        engine.set_scroll_position(50.0).unwrap();

        let window = engine.window();
        assert!(engine.visible_items().is_empty(), "{mode}: no visible items");
        assert_eq!((window.start_index, window.end_index), (0, 0), "{mode}");
        assert_eq!((window.before_size, window.after_size), (0.0, 0.0), "{mode}");
        assert_eq!(window.list_size, 0.0, "{mode}");
        assert_eq!(window.scroll_pos, 0.0, "{mode}");
    }
}

#[test]
fn disabled_mode_shows_everything_regardless_of_scroll() {
    let mut engine = engine(ViewportMode::Fixed, 20.0);
    engine.set_models(0..200);
    engine.set_viewport_size(100.0).unwrap();
    engine.set_scroll_position(1234.0).unwrap();
    assert_eq!(engine.visible_items().len(), 5);

    engine.set_mode(ViewportMode::Disabled);
    let window = engine.window();
    assert_eq!(engine.visible_items().len(), 200);
    assert_eq!((window.before_size, window.after_size), (0.0, 0.0));
    assert_eq!((window.start_index, window.end_index), (0, 199));

    // Replacing the list in disabled mode exposes the new list as is.
    engine.set_models(0..3);
    assert_eq!(engine.visible_items().len(), 3);
}

#[test]
fn auto_mode_measurement_pass() {
    let mut engine = engine(ViewportMode::Auto, 40.0);
    engine.set_auto_min_size(5.0).unwrap();
    engine.set_models(0..100);
    engine.set_viewport_size(120.0).unwrap();
    // Before measuring, every item uses the default size: three fit.
    assert_eq!(engine.window().end_index, 2);

    // The host measures the materialized items and reports back.
    let materialized = engine.window().visible_range();
    for index in materialized {
        engine.set_item_size(index, Some(20.0)).unwrap();
    }
    // A measurement at the threshold is treated as not measured.
    engine.set_item_size(3, Some(5.0)).unwrap();

    assert_eq!(engine.item_size(0), Some(20.0));
    assert_eq!(engine.item_size(3), Some(40.0));
    let window = engine.window();
    // 20 + 20 + 20 + 40 + 40 = 140 >= 120.
    assert_eq!((window.start_index, window.end_index), (0, 4));
    assert_eq!(window.list_size, 60.0 + 97.0 * 40.0);
}

#[test]
fn zero_viewport_keeps_one_item() {
    let mut engine = engine(ViewportMode::Fixed, 20.0);
    engine.set_models(0..10);
    engine.set_viewport_size(0.0).unwrap();
    engine.set_scroll_position(45.0).unwrap();
    let window = engine.window();
    assert_eq!(window.visible_count, 1);
    assert_eq!(window.start_index, 2);
}

#[test]
fn ensure_visible_with_identity_matching() {
    #[derive(Debug)]
    struct Row {
        id: u64,
    }

    let mut engine: ViewportEngine<Row> = ViewportEngine::with_config(
        ViewportConfig::default()
            .with_mode(ViewportMode::Fixed)
            .with_default_item_size(30.0)
            .with_direction(ViewportDirection::Horizontal),
    )
    .unwrap();
    engine.set_models((0..50).map(|id| Row { id }));
    engine.set_viewport_size(90.0).unwrap();

    let outcome = engine.ensure_visible_by(|row| row.id == 20);
    assert_eq!(
        outcome,
        EnsureVisible::Scrolled {
            index: 20,
            from: 0.0,
            to: 540.0
        }
    );
    let pos = engine.scroll_position();
    assert!(pos <= 600.0 && 630.0 <= pos + 90.0);
    assert_eq!(engine.window().direction, ViewportDirection::Horizontal);

    assert_eq!(
        engine.ensure_visible_by(|row| row.id == 500),
        EnsureVisible::NotFound
    );
    assert_eq!(engine.scroll_position(), pos);
}

#[test]
fn scroll_is_idempotent() {
    let mut engine = engine(ViewportMode::Variable, 15.0);
    engine.set_models(0..500);
    engine.set_viewport_size(77.0).unwrap();
    engine.set_scroll_position(1234.5).unwrap();
    let first = *engine.window();
    engine.set_scroll_position(1234.5).unwrap();
    assert_eq!(*engine.window(), first);
}
