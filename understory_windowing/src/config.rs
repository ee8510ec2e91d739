// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ScrollStyle, ViewportDirection, ViewportError, ViewportMode};

/// Default size for unmeasured items, in logical pixels.
pub const DEFAULT_ITEM_SIZE: f64 = 40.0;

/// Default distance moved by one scroll-button press.
pub const DEFAULT_LINE_STEP: f64 = 20.0;

/// Initial settings for a [`ViewportEngine`](crate::ViewportEngine).
///
/// Every field can also be changed later through the engine's setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Windowing mode.
    pub mode: ViewportMode,
    /// Scroll axis.
    pub direction: ViewportDirection,
    /// Size used in fixed mode and for items without a usable size.
    pub default_item_size: f64,
    /// In auto mode, measured sizes at or below this value are ignored.
    pub auto_min_size: f64,
    /// Scroll presentation.
    pub scroll_style: ScrollStyle,
    /// Distance moved by [`ScrollStep::LineBackward`](crate::ScrollStep::LineBackward)
    /// and [`ScrollStep::LineForward`](crate::ScrollStep::LineForward).
    pub line_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mode: ViewportMode::default(),
            direction: ViewportDirection::default(),
            default_item_size: DEFAULT_ITEM_SIZE,
            auto_min_size: 0.0,
            scroll_style: ScrollStyle::default(),
            line_step: DEFAULT_LINE_STEP,
        }
    }
}

impl ViewportConfig {
    /// Sets the windowing mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ViewportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn with_direction(mut self, direction: ViewportDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the default item size.
    #[must_use]
    pub fn with_default_item_size(mut self, size: f64) -> Self {
        self.default_item_size = size;
        self
    }

    /// Sets the auto-mode minimum measured size.
    #[must_use]
    pub fn with_auto_min_size(mut self, size: f64) -> Self {
        self.auto_min_size = size;
        self
    }

    /// Sets the scroll presentation.
    #[must_use]
    pub fn with_scroll_style(mut self, style: ScrollStyle) -> Self {
        self.scroll_style = style;
        self
    }

    /// Sets the scroll-button line step.
    #[must_use]
    pub fn with_line_step(mut self, step: f64) -> Self {
        self.line_step = step;
        self
    }

    /// Checks every size in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any size is negative or not finite, or if the
    /// default item size is zero.
    pub fn validate(&self) -> Result<(), ViewportError> {
        validate_default_item_size(self.default_item_size)?;
        ViewportError::check_size("auto-mode minimum size", self.auto_min_size)?;
        ViewportError::check_size("line step", self.line_step)?;
        Ok(())
    }
}

pub(crate) fn validate_default_item_size(size: f64) -> Result<f64, ViewportError> {
    let size = ViewportError::check_size("default item size", size)?;
    if size == 0.0 {
        return Err(ViewportError::ZeroItemSize);
    }
    Ok(size)
}
