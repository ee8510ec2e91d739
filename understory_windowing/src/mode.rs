// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::ParseEnumError;

/// How item sizes are derived and whether windowing happens at all.
///
/// Switching between modes is always legal and always triggers a full
/// recomputation of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewportMode {
    /// No windowing: every item is materialized and both spacers are empty.
    ///
    /// Suitable for short lists (roughly under a hundred items).
    Disabled,
    /// Every item uses the default item size. Windowing is constant-time
    /// index arithmetic.
    #[default]
    Fixed,
    /// Each item uses its own size when known, the default size otherwise.
    Variable,
    /// Like [`ViewportMode::Variable`], but sizes are expected to come from a
    /// measurement pass after first paint. Measured sizes at or below the
    /// configured minimum are treated as not yet measured.
    Auto,
}

impl ViewportMode {
    /// Returns the lowercase name used by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Fixed => "fixed",
            Self::Variable => "variable",
            Self::Auto => "auto",
        }
    }

    /// Returns `true` if only a window of the items is materialized.
    #[must_use]
    pub const fn is_windowed(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            "auto" => Ok(Self::Auto),
            _ => Err(ParseEnumError {
                kind: "viewport mode",
            }),
        }
    }
}

/// Scroll axis of the viewport.
///
/// The windowing itself is axis-agnostic; the direction is carried through to
/// the [`ViewportWindow`](crate::ViewportWindow) so the host knows whether to
/// apply spacers and scroll offsets horizontally or vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewportDirection {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items stack left to right.
    Horizontal,
}

impl ViewportDirection {
    /// Returns the lowercase name used by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for ViewportDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(ParseEnumError {
                kind: "viewport direction",
            }),
        }
    }
}

/// How the host exposes scrolling to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollStyle {
    /// Native scrollbars; the host sizes leading and trailing spacers from
    /// `before_size` and `after_size`.
    #[default]
    Scrollbar,
    /// Backward/forward buttons at either end of the list; the host shifts
    /// the first visible item by `start_offset` instead of using spacers.
    Buttons,
}

impl ScrollStyle {
    /// Returns the lowercase name used by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scrollbar => "scrollbar",
            Self::Buttons => "buttons",
        }
    }
}

impl fmt::Display for ScrollStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scrollbar" => Ok(Self::Scrollbar),
            "buttons" => Ok(Self::Buttons),
            _ => Err(ParseEnumError {
                kind: "scroll style",
            }),
        }
    }
}

/// Where to place an item when scrolling it into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align the item's leading edge with the viewport start.
    Start,
    /// Center the item in the viewport.
    Center,
    /// Align the item's trailing edge with the viewport end.
    End,
    /// Scroll by the smallest amount that shows the whole item; do nothing if
    /// it is already fully visible.
    #[default]
    Nearest,
}

/// A discrete relative scroll request, as issued by scroll buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollStep {
    /// One line step towards the start.
    LineBackward,
    /// One line step towards the end.
    LineForward,
    /// One viewport towards the start.
    PageBackward,
    /// One viewport towards the end.
    PageForward,
}

#[cfg(test)]
mod tests {
    use super::{ScrollStyle, ViewportDirection, ViewportMode};

    #[test]
    fn modes_parse_from_their_names() {
        for mode in [
            ViewportMode::Disabled,
            ViewportMode::Fixed,
            ViewportMode::Variable,
            ViewportMode::Auto,
        ] {
            assert_eq!(mode.as_str().parse::<ViewportMode>(), Ok(mode));
        }
        assert!("Fixed".parse::<ViewportMode>().is_err());
        assert!("".parse::<ViewportMode>().is_err());
    }

    #[test]
    fn direction_and_style_parse() {
        assert_eq!(
            "horizontal".parse::<ViewportDirection>(),
            Ok(ViewportDirection::Horizontal)
        );
        assert_eq!("buttons".parse::<ScrollStyle>(), Ok(ScrollStyle::Buttons));
        assert!("diagonal".parse::<ViewportDirection>().is_err());
    }

    #[test]
    fn only_disabled_is_unwindowed() {
        assert!(!ViewportMode::Disabled.is_windowed());
        assert!(ViewportMode::Auto.is_windowed());
    }
}
