// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::config::validate_default_item_size;
use crate::{
    ExtentModel, FixedExtents, Item, PrefixSumIndex, ScrollAlign, ScrollStep, ScrollStyle,
    SizingStrategy, ViewportConfig, ViewportDirection, ViewportError, ViewportMode,
    ViewportWindow, compute_window,
};

type Listener = Box<dyn FnMut(&ViewportWindow)>;

/// Outcome of an ensure-visible request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnsureVisible {
    /// No item matched; the viewport was left untouched.
    NotFound,
    /// The item was already fully visible; nothing was recomputed.
    AlreadyVisible {
        /// Index of the matched item.
        index: usize,
    },
    /// The scroll position changed to bring the item into view.
    Scrolled {
        /// Index of the matched item.
        index: usize,
        /// Scroll position before the request.
        from: f64,
        /// Scroll position after the request.
        to: f64,
    },
}

impl EnsureVisible {
    /// Returns `true` unless the item was not found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Stateful windowing engine for one scrollable list.
///
/// The engine owns the item list and the viewport state, and keeps the most
/// recent [`ViewportWindow`] up to date. Every setter recomputes synchronously,
/// so [`ViewportEngine::window`] never exposes an intermediate state. An
/// optional listener is called exactly once per recomputation.
///
/// Cost model:
/// - Item list, mode, default size, and [`ViewportEngine::refresh`] rebuild the
///   cumulative size index in O(n).
/// - A single item resize is an O(log n) point update.
/// - Scroll, resize, and direction changes only requery the index: O(1) in
///   fixed mode, O(log n) otherwise.
pub struct ViewportEngine<M> {
    items: Vec<Item<M>>,
    config: ViewportConfig,
    viewport_size: f64,
    scroll_pos: f64,
    /// Effective sizes for every mode except [`ViewportMode::Fixed`].
    index: PrefixSumIndex,
    window: ViewportWindow,
    revision: u64,
    listener: Option<Listener>,
}

impl<M: fmt::Debug> fmt::Debug for ViewportEngine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportEngine")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("viewport_size", &self.viewport_size)
            .field("scroll_pos", &self.scroll_pos)
            .field("window", &self.window)
            .field("revision", &self.revision)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<M> Default for ViewportEngine<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ViewportEngine<M> {
    /// Creates an empty engine with the default configuration and a
    /// zero-sized viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(ViewportConfig::default())
    }

    /// Creates an empty engine from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if [`ViewportConfig::validate`] fails.
    pub fn with_config(config: ViewportConfig) -> Result<Self, ViewportError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ViewportConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
            viewport_size: 0.0,
            scroll_pos: 0.0,
            index: PrefixSumIndex::new(),
            window: ViewportWindow::empty(0.0, config.mode, config.direction, config.scroll_style),
            revision: 0,
            listener: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.config.mode
    }

    /// Current scroll axis.
    #[must_use]
    pub fn direction(&self) -> ViewportDirection {
        self.config.direction
    }

    /// Current default item size.
    #[must_use]
    pub fn default_item_size(&self) -> f64 {
        self.config.default_item_size
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    /// Current (clamped) scroll position.
    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.scroll_pos
    }

    /// Most recently computed window.
    #[must_use]
    pub fn window(&self) -> &ViewportWindow {
        &self.window
    }

    /// Items inside the current window.
    #[must_use]
    pub fn visible_items(&self) -> &[Item<M>] {
        &self.items[self.window.visible_range()]
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item<M>] {
        &self.items
    }

    /// Mutable access to the items.
    ///
    /// Size changes made through this slice are not seen until
    /// [`ViewportEngine::refresh`] is called.
    pub fn items_mut(&mut self) -> &mut [Item<M>] {
        &mut self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recomputations so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a callback invoked with the new window after every
    /// recomputation. Replaces any previous listener.
    pub fn set_listener(&mut self, listener: impl FnMut(&ViewportWindow) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Layout size of item `index` under the current mode.
    #[must_use]
    pub fn item_size(&self, index: usize) -> Option<f64> {
        let item = self.items.get(index)?;
        Some(self.sizing().size_of(item.size))
    }

    /// Offset of the leading edge of item `index`.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> Option<f64> {
        (index < self.items.len()).then(|| self.with_extents(|extents| extents.offset_of(index)))
    }

    /// Replaces the item list.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the engine unchanged, if any item carries a
    /// negative or non-finite size.
    pub fn set_items(&mut self, items: Vec<Item<M>>) -> Result<(), ViewportError> {
        for item in &items {
            if let Some(size) = item.size {
                ViewportError::check_size("item size", size)?;
            }
        }
        self.items = items;
        self.rebuild();
        Ok(())
    }

    /// Replaces the item list with unmeasured items wrapping `models`.
    pub fn set_models(&mut self, models: impl IntoIterator<Item = M>) {
        self.items = models.into_iter().map(Item::new).collect();
        self.rebuild();
    }

    /// Switches the windowing mode. The scroll position is kept (then clamped).
    pub fn set_mode(&mut self, mode: ViewportMode) {
        self.config.mode = mode;
        self.rebuild();
    }

    /// Switches the scroll axis.
    pub fn set_direction(&mut self, direction: ViewportDirection) {
        self.config.direction = direction;
        self.recompute();
    }

    /// Switches the scroll presentation and returns to the start of the list.
    pub fn set_scroll_style(&mut self, style: ScrollStyle) {
        self.config.scroll_style = style;
        self.scroll_pos = 0.0;
        self.recompute();
    }

    /// Sets the size used in fixed mode and for unmeasured items.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero, negative, or not finite.
    pub fn set_default_item_size(&mut self, size: f64) -> Result<(), ViewportError> {
        self.config.default_item_size = validate_default_item_size(size)?;
        self.rebuild();
        Ok(())
    }

    /// Sets the auto-mode minimum measured size.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is negative or not finite.
    pub fn set_auto_min_size(&mut self, size: f64) -> Result<(), ViewportError> {
        self.config.auto_min_size = ViewportError::check_size("auto-mode minimum size", size)?;
        self.rebuild();
        Ok(())
    }

    /// Sets the distance moved by a line step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is negative or not finite.
    pub fn set_line_step(&mut self, step: f64) -> Result<(), ViewportError> {
        self.config.line_step = ViewportError::check_size("line step", step)?;
        Ok(())
    }

    /// Sets the viewport size. The scroll position is clamped to the new
    /// maximum.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is negative or not finite.
    pub fn set_viewport_size(&mut self, size: f64) -> Result<(), ViewportError> {
        self.viewport_size = ViewportError::check_size("viewport size", size)?;
        self.recompute();
        Ok(())
    }

    /// Sets the scroll position, clamped to `[0, max(0, list_size - viewport_size)]`.
    ///
    /// Only the window is recomputed; the size index is left as is.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` is NaN or infinite.
    pub fn set_scroll_position(&mut self, pos: f64) -> Result<(), ViewportError> {
        if !pos.is_finite() {
            return Err(ViewportError::NonFiniteSize {
                what: "scroll position",
                value: pos,
            });
        }
        self.scroll_pos = pos;
        self.recompute();
        Ok(())
    }

    /// Moves the scroll position by `delta` (for example a wheel event).
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is NaN or infinite.
    pub fn scroll_by(&mut self, delta: f64) -> Result<(), ViewportError> {
        if !delta.is_finite() {
            return Err(ViewportError::NonFiniteSize {
                what: "scroll delta",
                value: delta,
            });
        }
        self.set_scroll_position(self.scroll_pos + delta)
    }

    /// Applies a button-style scroll step.
    pub fn step(&mut self, step: ScrollStep) {
        let delta = match step {
            ScrollStep::LineBackward => -self.config.line_step,
            ScrollStep::LineForward => self.config.line_step,
            ScrollStep::PageBackward => -self.viewport_size,
            ScrollStep::PageForward => self.viewport_size,
        };
        self.scroll_pos += delta;
        self.recompute();
    }

    /// Records a measured (or cleared) size for item `index`.
    ///
    /// This is an O(log n) point update of the size index.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or `size` is negative or
    /// not finite.
    pub fn set_item_size(&mut self, index: usize, size: Option<f64>) -> Result<(), ViewportError> {
        let index = ViewportError::check_index(index, self.items.len())?;
        let size = size
            .map(|s| ViewportError::check_size("item size", s))
            .transpose()?;
        self.items[index].size = size;
        if self.config.mode != ViewportMode::Fixed {
            let effective = self.sizing().size_of(size);
            self.index.set(index, effective);
        }
        self.recompute();
        Ok(())
    }

    /// Scrolls by the smallest amount that makes the first item whose model
    /// equals `model` fully visible.
    pub fn ensure_visible(&mut self, model: &M) -> EnsureVisible
    where
        M: PartialEq,
    {
        self.ensure_visible_by(|candidate| candidate == model)
    }

    /// Like [`ViewportEngine::ensure_visible`], with caller-supplied matching.
    pub fn ensure_visible_by(&mut self, mut matches: impl FnMut(&M) -> bool) -> EnsureVisible {
        match self.items.iter().position(|item| matches(&item.model)) {
            Some(index) => self.scroll_to_index_unchecked(index, ScrollAlign::Nearest),
            None => EnsureVisible::NotFound,
        }
    }

    /// Scrolls item `index` into view with the given alignment.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: ScrollAlign,
    ) -> Result<EnsureVisible, ViewportError> {
        let index = ViewportError::check_index(index, self.items.len())?;
        Ok(self.scroll_to_index_unchecked(index, align))
    }

    fn scroll_to_index_unchecked(&mut self, index: usize, align: ScrollAlign) -> EnsureVisible {
        let (start, size) =
            self.with_extents(|extents| (extents.offset_of(index), extents.extent_of(index)));
        let end = start + size;
        let viewport = self.viewport_size;
        let from = self.scroll_pos;
        let target = match align {
            ScrollAlign::Start => start,
            ScrollAlign::End => end - viewport,
            ScrollAlign::Center => start + (size - viewport) / 2.0,
            ScrollAlign::Nearest => {
                if start < from || size > viewport {
                    start
                } else if end > from + viewport {
                    end - viewport
                } else {
                    return EnsureVisible::AlreadyVisible { index };
                }
            }
        };
        self.scroll_pos = target;
        self.recompute();
        EnsureVisible::Scrolled {
            index,
            from,
            to: self.scroll_pos,
        }
    }

    /// Rebuilds the size index from the items and recomputes the window.
    ///
    /// Use this after mutating sizes through [`ViewportEngine::items_mut`] or
    /// after any external change the engine was not told about.
    pub fn refresh(&mut self) {
        self.rebuild();
    }

    fn sizing(&self) -> SizingStrategy {
        SizingStrategy {
            mode: self.config.mode,
            default_size: self.config.default_item_size,
            auto_min_size: self.config.auto_min_size,
        }
    }

    fn with_extents<R>(&self, f: impl FnOnce(&dyn ExtentModel) -> R) -> R {
        if self.config.mode == ViewportMode::Fixed {
            f(&FixedExtents::new(
                self.items.len(),
                self.config.default_item_size,
            ))
        } else {
            f(&self.index)
        }
    }

    fn rebuild(&mut self) {
        self.index = if self.config.mode == ViewportMode::Fixed {
            PrefixSumIndex::new()
        } else {
            let sizing = self.sizing();
            PrefixSumIndex::from_sizes(self.items.iter().map(|item| sizing.size_of(item.size)))
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = self.items.len(),
            mode = self.config.mode.as_str(),
            "rebuilt viewport size index"
        );
        self.recompute();
    }

    fn recompute(&mut self) {
        let viewport = self.viewport_size;
        let style = self.config.scroll_style;
        let (mode, direction) = (self.config.mode, self.config.direction);
        let requested = self.scroll_pos;
        let window = self.with_extents(|extents| {
            let max_scroll = (extents.total_extent() - viewport).max(0.0);
            let pos = requested.clamp(0.0, max_scroll);
            compute_window(extents, pos, viewport, mode, direction, style)
        });
        self.scroll_pos = window.scroll_pos;
        self.window = window;
        self.revision += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            start = window.start_index,
            end = window.end_index,
            scroll_pos = window.scroll_pos,
            revision = self.revision,
            "viewport window recomputed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.window);
        }
    }
}
