// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the configuration boundary.

use core::fmt;

/// Error returned when a size, position, or index handed to a
/// [`ViewportEngine`](crate::ViewportEngine) is unusable.
///
/// Sizes are never silently clamped: a negative viewport or item size is a
/// configuration bug on the caller's side and is surfaced here instead of
/// producing an empty viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// A size or position was negative.
    NegativeSize {
        /// Which input was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A size or position was NaN or infinite.
    NonFiniteSize {
        /// Which input was rejected.
        what: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The default item size was zero.
    ///
    /// Fixed mode divides scroll offsets by this value, so it must be positive.
    ZeroItemSize,
    /// An item index was outside `0..len`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items in the list.
        len: usize,
    },
}

impl ViewportError {
    /// Checks that `value` is finite and non-negative.
    pub(crate) fn check_size(what: &'static str, value: f64) -> Result<f64, Self> {
        if !value.is_finite() {
            Err(Self::NonFiniteSize { what, value })
        } else if value < 0.0 {
            Err(Self::NegativeSize { what, value })
        } else {
            // Normalize `-0.0`.
            Ok(value + 0.0)
        }
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, Self> {
        if index < len {
            Ok(index)
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize { what, value } => {
                write!(f, "{what} must not be negative (got {value})")
            }
            Self::NonFiniteSize { what, value } => {
                write!(f, "{what} must be finite (got {value})")
            }
            Self::ZeroItemSize => f.write_str("default item size must be greater than zero"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "item index {index} is out of range for {len} items")
            }
        }
    }
}

impl core::error::Error for ViewportError {}

/// Error returned when parsing a [`ViewportMode`](crate::ViewportMode),
/// [`ViewportDirection`](crate::ViewportDirection) or
/// [`ScrollStyle`](crate::ScrollStyle) from its name fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Name of the type that was being parsed.
    pub kind: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} name", self.kind)
    }
}

impl core::error::Error for ParseEnumError {}
