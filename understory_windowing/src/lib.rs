// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_windowing --heading-base-level=0

//! Understory Windowing: viewport windowing for large item lists.
//!
//! Given an ordered list of items, each with a known or default size, a
//! viewport size, and a scroll position, this crate computes which contiguous
//! range of items should be materialized, how large the leading and trailing
//! spacers around them must be, and which scroll position the host should
//! apply back to its scroll surface. It also resolves "scroll this item into
//! view" requests.
//!
//! The crate knows nothing about widgets, templates, or rendering. Host
//! frameworks are responsible for:
//!
//! - Forwarding resize, scroll, wheel, and button events to a [`ViewportEngine`]
//!   (directly or via [`ViewportEvent`]).
//! - Materializing [`ViewportEngine::visible_items`] between spacers of
//!   [`ViewportWindow::before_size`] and [`ViewportWindow::after_size`].
//! - Applying [`ViewportWindow::scroll_pos`] back to the scroll surface.
//! - In [`ViewportMode::Auto`], measuring items after first paint and feeding
//!   the sizes back with [`ViewportEngine::set_item_size`].
//!
//! The core pieces are:
//!
//! - [`ViewportMode`]: `Disabled`, `Fixed`, `Variable`, or `Auto` sizing.
//! - [`SizingStrategy`]: the per-item size rule for each mode.
//! - [`ExtentModel`]: item offsets and searches, implemented by
//!   [`FixedExtents`] (index arithmetic) and [`PrefixSumIndex`] (a Fenwick
//!   tree with O(log n) point updates).
//! - [`compute_window`]: the windowing computation itself.
//! - [`ViewportEngine`]: owns the state, recomputes on every change, and
//!   caches the latest [`ViewportWindow`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_windowing::{ViewportConfig, ViewportEngine, ViewportMode};
//!
//! // 1000 rows, 20 logical pixels each.
//! let config = ViewportConfig::default()
//!     .with_mode(ViewportMode::Fixed)
//!     .with_default_item_size(20.0);
//! let mut engine = ViewportEngine::with_config(config).unwrap();
//! engine.set_models(0..1000_u32);
//! engine.set_viewport_size(100.0).unwrap();
//!
//! engine.set_scroll_position(205.0).unwrap();
//!
//! let window = engine.window();
//! assert_eq!((window.start_index, window.end_index), (10, 14));
//! assert_eq!(window.before_size, 200.0);
//! assert_eq!(window.after_size, window.list_size - 300.0);
//! assert_eq!(engine.visible_items().len(), 5);
//! ```
//!
//! ## Window shape
//!
//! The window starts at the last item whose leading edge is at or before the
//! scroll position, and extends until the materialized items span at least one
//! viewport, or the list ends. A non-empty list always yields at least one
//! visible item, even for a zero-sized viewport. In fixed mode this reduces to
//! `start = floor(scroll / size)` and `end = start + ceil(viewport / size) - 1`.
//!
//! All sizes and offsets live in a caller-chosen 1D coordinate space (typically
//! logical pixels) and must be finite and non-negative. Invalid sizes are
//! rejected with a [`ViewportError`] rather than clamped.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for index rebuilds, window updates, and
//!   clamped spacers.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod event;
mod extent;
mod item;
mod mode;
mod prefix_sum;
mod sizing;
mod window;

pub use config::{DEFAULT_ITEM_SIZE, DEFAULT_LINE_STEP, ViewportConfig};
pub use engine::{EnsureVisible, ViewportEngine};
pub use error::{ParseEnumError, ViewportError};
pub use event::ViewportEvent;
pub use extent::{ExtentModel, FixedExtents};
pub use item::Item;
pub use mode::{ScrollAlign, ScrollStep, ScrollStyle, ViewportDirection, ViewportMode};
pub use prefix_sum::PrefixSumIndex;
pub use sizing::SizingStrategy;
pub use window::{ViewportWindow, compute_window};
