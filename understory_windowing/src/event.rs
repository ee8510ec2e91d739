// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single entry point for host events.
//!
//! Hosts that already have an event loop can translate their scroll, resize,
//! and wheel notifications into [`ViewportEvent`]s and forward them through
//! [`ViewportEngine::handle`] instead of calling individual setters.

use crate::{EnsureVisible, ScrollStep, ViewportEngine, ViewportError};

/// An event from the hosting rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent<'a, M> {
    /// The viewport was resized to this size along the scroll axis.
    Resize(f64),
    /// The scroll surface reports a new absolute position.
    Scroll(f64),
    /// A wheel or touchpad delta.
    Wheel(f64),
    /// A scroll button was pressed.
    Step(ScrollStep),
    /// Bring the item with this model into view.
    EnsureVisible(&'a M),
    /// Item sizes changed outside the engine.
    Refresh,
}

impl<M: PartialEq> ViewportEngine<M> {
    /// Applies `event` and reports whether the window was recomputed.
    ///
    /// An [`ViewportEvent::EnsureVisible`] for an unknown model, or for an
    /// item that is already fully visible, returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying setter for invalid sizes or
    /// positions.
    pub fn handle(&mut self, event: ViewportEvent<'_, M>) -> Result<bool, ViewportError> {
        match event {
            ViewportEvent::Resize(size) => self.set_viewport_size(size)?,
            ViewportEvent::Scroll(pos) => self.set_scroll_position(pos)?,
            ViewportEvent::Wheel(delta) => self.scroll_by(delta)?,
            ViewportEvent::Step(step) => self.step(step),
            ViewportEvent::EnsureVisible(model) => {
                return Ok(matches!(
                    self.ensure_visible(model),
                    EnsureVisible::Scrolled { .. }
                ));
            }
            ViewportEvent::Refresh => self.refresh(),
        }
        Ok(true)
    }
}
