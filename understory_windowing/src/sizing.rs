// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout sizes.

use crate::ViewportMode;

/// Resolves the layout size of an item from the current mode.
///
/// This is a pure function of the mode, the default size, the auto-mode
/// threshold, and the item's own size. The result is always finite and
/// non-negative: a stored size that is negative, NaN, or infinite is ignored
/// in favour of the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingStrategy {
    /// Active mode.
    pub mode: ViewportMode,
    /// Size used in fixed mode and for unmeasured items.
    pub default_size: f64,
    /// In auto mode, measured sizes must be strictly greater than this.
    pub auto_min_size: f64,
}

impl SizingStrategy {
    /// Returns the size to use for an item whose own size is `item_size`.
    ///
    /// - [`ViewportMode::Fixed`]: always the default size.
    /// - [`ViewportMode::Variable`] and [`ViewportMode::Disabled`]: the item
    ///   size when present, the default otherwise. Disabled mode never windows,
    ///   but still reports a list size.
    /// - [`ViewportMode::Auto`]: the item size when present and strictly
    ///   greater than `auto_min_size`, the default otherwise.
    #[must_use]
    pub fn size_of(&self, item_size: Option<f64>) -> f64 {
        let measured = item_size.filter(|s| s.is_finite() && *s >= 0.0);
        match (self.mode, measured) {
            (ViewportMode::Fixed, _) | (_, None) => self.default_size,
            (ViewportMode::Auto, Some(size)) if size <= self.auto_min_size => self.default_size,
            (_, Some(size)) => size,
        }
    }
}
