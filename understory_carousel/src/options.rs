// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mover configuration.

use crate::Direction;

/// How the carousel moves between slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderKind {
    /// A bounded strip; positions may be trimmed at the edges.
    #[default]
    Slide,
    /// A cyclic strip; positions past either limit wrap by one cycle onto clones.
    Loop,
    /// Slides cross-fade in place; the list is never translated.
    Fade,
}

/// Where the active slide sits inside the list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Focus {
    /// The active slide's leading edge aligns with the list's leading edge.
    #[default]
    Start,
    /// The active slide is centered in the list.
    Center,
    /// The list is offset by this fraction of the active slide's size (gap included).
    Fraction(f64),
}

/// Edge trimming policy for bounded carousels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrimSpace {
    /// Never clamp; empty space may show before the first or after the last slide.
    Off,
    /// Clamp positions so the first and last slides stay flush with the list edges.
    #[default]
    On,
    /// Clamp like [`TrimSpace::On`], and when a move lands on a trimmed position
    /// that did not change anything visible, ask for one more step.
    Move,
}

impl TrimSpace {
    /// Returns `true` if positions are clamped at the edges.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// What happens when a move is requested while another is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlap {
    /// Start the new move right away; the driver drops the previous one.
    #[default]
    Restart,
    /// Ignore the request until the current move completes.
    Reject,
}

/// Options for a [`Mover`](crate::Mover).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoverOptions {
    /// Bounded, cyclic, or fading.
    pub kind: SliderKind,
    /// Reading direction; determines axis and sign of positions.
    pub direction: Direction,
    /// Alignment of the active slide.
    pub focus: Focus,
    /// Edge trimming policy. Only applies to [`SliderKind::Slide`].
    pub trim_space: TrimSpace,
    /// Policy for overlapping moves.
    pub overlap: Overlap,
}

impl MoverOptions {
    /// Returns options for a cyclic carousel in the given direction.
    #[must_use]
    pub const fn looping(direction: Direction) -> Self {
        Self {
            kind: SliderKind::Loop,
            direction,
            focus: Focus::Start,
            trim_space: TrimSpace::On,
            overlap: Overlap::Restart,
        }
    }

    /// Replaces the focus alignment.
    #[must_use]
    pub const fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    /// Replaces the trimming policy.
    #[must_use]
    pub const fn with_trim_space(mut self, trim_space: TrimSpace) -> Self {
        self.trim_space = trim_space;
        self
    }

    /// Replaces the overlap policy.
    #[must_use]
    pub const fn with_overlap(mut self, overlap: Overlap) -> Self {
        self.overlap = overlap;
        self
    }

    /// Returns `true` when positions wrap by one cycle.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        matches!(self.kind, SliderKind::Loop)
    }

    /// Returns `true` when trimming applies: bounded kind with trimming enabled.
    #[must_use]
    pub const fn trims(&self) -> bool {
        matches!(self.kind, SliderKind::Slide) && self.trim_space.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::{Focus, MoverOptions, Overlap, SliderKind, TrimSpace};
    use crate::Direction;

    #[test]
    fn defaults_describe_a_trimmed_ltr_slider() {
        let options = MoverOptions::default();
        assert_eq!(options.kind, SliderKind::Slide);
        assert_eq!(options.direction, Direction::Ltr);
        assert_eq!(options.focus, Focus::Start);
        assert_eq!(options.overlap, Overlap::Restart);
        assert!(options.trims());
        assert!(!options.is_loop());
    }

    #[test]
    fn loop_kind_never_trims() {
        let options = MoverOptions::looping(Direction::Rtl).with_trim_space(TrimSpace::Move);
        assert!(options.is_loop());
        assert!(!options.trims());
        assert!(TrimSpace::Move.is_enabled());
        assert!(!TrimSpace::Off.is_enabled());
    }
}
