// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible window and the function that computes it.

use core::ops::Range;

use crate::{ExtentModel, ScrollStyle, ViewportDirection, ViewportMode};

/// Result of a windowing pass: which items to materialize and how large the
/// spacers around them are.
///
/// `start_index..=end_index` is inclusive. When there are no visible items,
/// both indices and every size except `viewport_size` are zero.
///
/// At all times `before_size + visible_size() + after_size == list_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWindow {
    /// Index of the first visible item.
    pub start_index: usize,
    /// Index of the last visible item (inclusive).
    pub end_index: usize,
    /// Number of visible items.
    pub visible_count: usize,
    /// Cumulative size of the items before `start_index`.
    pub before_size: f64,
    /// Cumulative size of the items after `end_index`.
    pub after_size: f64,
    /// Cumulative size of the whole list.
    pub list_size: f64,
    /// Size of the viewport along the scroll axis.
    pub viewport_size: f64,
    /// Clamped scroll position the host should apply to its scroll surface.
    pub scroll_pos: f64,
    /// Mode the window was computed in.
    pub mode: ViewportMode,
    /// Scroll axis.
    pub direction: ViewportDirection,
    /// Scroll presentation.
    pub scroll_style: ScrollStyle,
}

impl ViewportWindow {
    /// A window over an empty list.
    #[must_use]
    pub fn empty(
        viewport_size: f64,
        mode: ViewportMode,
        direction: ViewportDirection,
        scroll_style: ScrollStyle,
    ) -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            visible_count: 0,
            before_size: 0.0,
            after_size: 0.0,
            list_size: 0.0,
            viewport_size,
            scroll_pos: 0.0,
            mode,
            direction,
            scroll_style,
        }
    }

    /// Returns `true` if no item is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_count == 0
    }

    /// Half-open range of visible item indices.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.visible_count
    }

    /// Cumulative size of the visible items.
    #[must_use]
    pub fn visible_size(&self) -> f64 {
        self.list_size - self.before_size - self.after_size
    }

    /// Largest scroll position that still fills the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.list_size - self.viewport_size).max(0.0)
    }

    /// How far the scroll position lies inside the first visible item.
    ///
    /// With [`ScrollStyle::Buttons`] the host shifts the materialized items by
    /// this amount instead of rendering a leading spacer.
    #[must_use]
    pub fn start_offset(&self) -> f64 {
        (self.scroll_pos - self.before_size).max(0.0)
    }

    /// Whether scrolling towards the start is possible (enables a "back" button).
    #[must_use]
    pub fn can_scroll_backward(&self) -> bool {
        self.scroll_pos > 0.0
    }

    /// Whether scrolling towards the end is possible (enables a "forward" button).
    #[must_use]
    pub fn can_scroll_forward(&self) -> bool {
        self.scroll_pos < self.max_scroll()
    }
}

/// Computes the window for an already clamped `scroll_pos`.
///
/// The window starts at the last item whose leading edge is at or before
/// `scroll_pos` and extends until the visible items span at least
/// `viewport_size`, or the list ends. It always contains at least one item
/// when `model` is non-empty, even for a zero-sized viewport.
///
/// When `mode` is [`ViewportMode::Disabled`], every item is visible and both
/// spacers are zero.
#[must_use]
pub fn compute_window<E: ExtentModel + ?Sized>(
    model: &E,
    scroll_pos: f64,
    viewport_size: f64,
    mode: ViewportMode,
    direction: ViewportDirection,
    scroll_style: ScrollStyle,
) -> ViewportWindow {
    let len = model.len();
    if len == 0 {
        return ViewportWindow::empty(viewport_size, mode, direction, scroll_style);
    }
    let list_size = model.total_extent();
    let base = ViewportWindow {
        list_size,
        viewport_size,
        scroll_pos,
        ..ViewportWindow::empty(viewport_size, mode, direction, scroll_style)
    };

    if !mode.is_windowed() {
        return ViewportWindow {
            end_index: len - 1,
            visible_count: len,
            ..base
        };
    }

    let start_index = model.index_at_offset(scroll_pos);
    let end_index = model.last_index_covering(start_index, viewport_size);
    let before_size = model.offset_of(start_index);
    let after_size = checked_after_size(list_size - model.offset_of(end_index + 1), list_size);

    ViewportWindow {
        start_index,
        end_index,
        visible_count: end_index - start_index + 1,
        before_size,
        after_size,
        ..base
    }
}

/// A negative trailing spacer means the cumulative index has drifted from the
/// item sizes. Fail fast in debug builds; render a zero spacer otherwise.
fn checked_after_size(after_size: f64, list_size: f64) -> f64 {
    if after_size >= 0.0 {
        return after_size;
    }
    let tolerance = 1e-9 * list_size.max(1.0);
    debug_assert!(
        after_size >= -tolerance,
        "trailing spacer is negative ({after_size}); cumulative size index is inconsistent"
    );
    #[cfg(feature = "tracing")]
    if after_size < -tolerance {
        tracing::warn!(after_size, list_size, "clamping negative trailing spacer");
    }
    0.0
}
