// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One entry of the logically scrollable list.
///
/// The `model` is opaque to the engine. `size` is the extent along the scroll
/// axis, if known; it stays `None` until the host measures the item.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<M> {
    /// Caller payload.
    pub model: M,
    /// Measured or declared size along the scroll axis.
    pub size: Option<f64>,
}

impl<M> Item<M> {
    /// Creates an item whose size is not yet known.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model, size: None }
    }

    /// Creates an item with a known size.
    #[must_use]
    pub fn with_size(model: M, size: f64) -> Self {
        Self {
            model,
            size: Some(size),
        }
    }
}

impl<M> From<M> for Item<M> {
    fn from(model: M) -> Self {
        Self::new(model)
    }
}
