// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless mover for sliding carousels.
//!
//! This crate computes and applies the position of a carousel's list (the strip
//! holding every slide) inside its track (the fixed viewport), and coordinates
//! moves with a pluggable transition driver.
//!
//! The core concepts are:
//!
//! - [`Layout`] and [`SlideRegistry`]: geometry queries over the track, with
//!   [`TrackLayout`] as a ready-made implementation backed by [`SlideExtents`].
//! - [`Sequencer`]: the host component that knows the current index and the
//!   last reachable one. [`Cursor`] is a plain implementation.
//! - [`Transition`]: the driver that animates a move. [`Tween`] interpolates
//!   with an [`Easing`] curve over caller-supplied timestamps.
//! - [`Mover`]: converts between indices and positions, wraps positions in loop
//!   mode, sequences moves through the driver, and snaps the list back into
//!   place after layout changes.
//!
//! Positions are measured along the slide axis in layout units. The mover stores
//! the last applied position; hosts read it with [`Mover::position`] or as a
//! [`kurbo::Affine`] via [`Mover::transform`].
//!
//! This crate deliberately does **not** decide when to move or which slide is
//! next. Hosts are responsible for:
//!
//! - Measuring slides and feeding extents into the layout.
//! - Deciding the destination of a move and calling [`Mover::move_to`].
//! - Pumping the driver ([`Mover::advance`]) or reporting its completion
//!   ([`Mover::finish`]).
//! - Reporting layout changes with [`Mover::handle_layout_change`].
//! - Reacting to the queued [`MoverEvent`]s.
//!
//! ## Minimal example
//!
//! A five-slide loop carousel stepping from the last slide onto the first:
//!
//! ```rust
//! use understory_carousel::{
//!     Cursor, Direction, Easing, MoveOutcome, Mover, MoverOptions, SlideExtents, TrackLayout,
//!     Tween, TweenConfig,
//! };
//!
//! // Five slides of 100 logical pixels, one visible at a time, two clones per side.
//! let layout = TrackLayout::new(SlideExtents::from_extents([100.0; 5]), 100.0).with_clones(2);
//! let tween = Tween::new(TweenConfig { speed_ms: 300, easing: Easing::Cubic });
//! let mut mover = Mover::new(
//!     layout,
//!     Cursor::new(4).at(4),
//!     tween,
//!     MoverOptions::looping(Direction::Ltr),
//! );
//! mover.mount().unwrap();
//! assert_eq!(mover.position(), -600.0);
//!
//! // Raw destination 5 is a clone of slide 0.
//! mover.move_to(5, 0, 4).unwrap();
//! // The list was re-homed one cycle back, next to slide 0.
//! assert_eq!(mover.position(), -100.0);
//!
//! let mut now = 0;
//! let outcome = loop {
//!     if let Some(outcome) = mover.advance(now).unwrap() {
//!         break outcome;
//!     }
//!     now += 16;
//! };
//! assert_eq!(outcome, MoveOutcome::Settled { index: 0, prev: 4, dest: 5 });
//! assert_eq!(mover.position(), -200.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod direction;
mod error;
mod extents;
mod layout;
mod looping;
mod mover;
mod options;
mod position;
mod sequencer;
mod transition;

#[cfg(test)]
mod test_support;

pub use direction::{Axis, Direction};
pub use error::GeometryError;
pub use extents::SlideExtents;
pub use layout::{Layout, Padding, SlideRegistry, TrackLayout};
pub use mover::{LayoutChanges, MoveOutcome, MoveState, Mover, MoverEvent};
pub use options::{Focus, MoverOptions, Overlap, SliderKind, TrimSpace};
pub use sequencer::{Cursor, Sequencer};
pub use transition::{
    Easing, MoveTicket, Transition, TransitionRequest, TransitionStep, Tween, TweenConfig,
};
