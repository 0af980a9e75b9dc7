// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and sign resolution for the list's reading direction.

use kurbo::Vec2;

/// The screen axis the list slides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Slides are laid out along `x`.
    Horizontal,
    /// Slides are laid out along `y`.
    Vertical,
}

impl Axis {
    /// Places `value` on this axis, pinning the orthogonal component to zero.
    #[must_use]
    pub const fn vector(self, value: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(value, 0.0),
            Self::Vertical => Vec2::new(0.0, value),
        }
    }

    /// Reads this axis' component of `v`.
    #[must_use]
    pub const fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// Reading direction of the carousel.
///
/// Positions are stored in screen coordinates. Advancing through the slides
/// moves the list toward negative coordinates for [`Direction::Ltr`] and
/// [`Direction::Ttb`], and toward positive coordinates for [`Direction::Rtl`].
/// [`Direction::orient`] maps between the two so that `orient(position)` is
/// always the distance scrolled along the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
    /// Top to bottom.
    Ttb,
}

impl Direction {
    /// Resolves the axis this direction slides along.
    #[must_use]
    pub const fn resolve(self) -> Axis {
        match self {
            Self::Ltr | Self::Rtl => Axis::Horizontal,
            Self::Ttb => Axis::Vertical,
        }
    }

    /// Converts between a screen-space position and an oriented distance.
    ///
    /// The mapping is its own inverse.
    #[must_use]
    pub const fn orient(self, value: f64) -> f64 {
        match self {
            Self::Rtl => value,
            Self::Ltr | Self::Ttb => -value,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Axis, Direction};

    #[test]
    fn orient_is_an_involution() {
        for dir in [Direction::Ltr, Direction::Rtl, Direction::Ttb] {
            assert_eq!(dir.orient(dir.orient(42.5)), 42.5);
        }
        assert_eq!(Direction::Ltr.orient(10.0), -10.0);
        assert_eq!(Direction::Rtl.orient(10.0), 10.0);
    }

    #[test]
    fn vertical_direction_pins_x() {
        let axis = Direction::Ttb.resolve();
        assert_eq!(axis, Axis::Vertical);
        assert_eq!(axis.vector(-30.0), Vec2::new(0.0, -30.0));
        assert_eq!(axis.component(Vec2::new(7.0, -30.0)), -30.0);
        assert_eq!(Direction::Rtl.resolve().vector(5.0), Vec2::new(5.0, 0.0));
    }
}
