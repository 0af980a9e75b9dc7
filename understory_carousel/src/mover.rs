// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The move orchestrator and repositioner.
//!
//! ## State machine
//!
//! A [`Mover`] is [`MoveState::Idle`] until [`Mover::move_to`] starts a move,
//! and returns to idle when the transition hands the move's [`MoveTicket`]
//! back through [`Mover::finish`]. There is no terminal state.
//!
//! With [`Overlap::Restart`] a new move may start while another is in flight:
//! the new request replaces the old one in the driver, the old ticket becomes
//! stale, and only the newest move can finish. With [`Overlap::Reject`] the new
//! request is ignored instead.
//!
//! ## Loop moves
//!
//! In loop mode the sequencer asks for moves whose raw destination `dest` lies
//! on a clone while the canonical `index` is a real slide. When the list can
//! be re-homed one cycle away without leaving its rendered extent, the mover
//! cancels the driver, silently shifts the list by one cycle, and then asks the
//! driver to animate to `index`, which is now a short hop away.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    GeometryError, Layout, MoveTicket, MoverOptions, Overlap, Sequencer, SlideRegistry,
    SliderKind, Transition, TransitionRequest, TransitionStep, TrimSpace,
};

// Positions closer than this are treated as unchanged.
const SETTLE_EPSILON: f64 = 1e-6;

/// Busy/idle state of a [`Mover`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveState {
    /// No move in flight.
    #[default]
    Idle,
    /// A move has started and not yet finished.
    Moving,
}

/// Notifications emitted by a [`Mover`], in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoverEvent {
    /// A move started.
    Move {
        /// Canonical destination.
        index: isize,
        /// Index before the move.
        prev: isize,
        /// Raw destination, possibly a clone.
        dest: isize,
    },
    /// A move finished.
    Moved {
        /// Canonical destination.
        index: isize,
        /// Index before the move.
        prev: isize,
        /// Raw destination, possibly a clone.
        dest: isize,
    },
    /// A translation wrapped by whole cycles; clone visibility may need a refresh.
    Shifted {
        /// Requested position.
        from: f64,
        /// Position actually applied.
        to: f64,
    },
    /// The list was snapped after a layout change; slide visibility must be recomputed.
    SlidesUpdated {
        /// Index the list was snapped to.
        index: isize,
    },
}

/// What the host should do after a move finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is complete.
    Settled {
        /// Canonical destination.
        index: isize,
        /// Index before the move.
        prev: isize,
        /// Raw destination.
        dest: isize,
    },
    /// The move landed on a trimmed edge without visibly moving; the sequencer
    /// should take one more step in the same direction, without looping.
    StepAgain {
        /// `true` to step toward higher indices.
        forward: bool,
    },
}

bitflags::bitflags! {
    /// Layout events after which the list must be snapped to the current slide.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayoutChanges: u8 {
        /// The carousel was mounted.
        const MOUNTED   = 0b0000_0001;
        /// The track or list was resized.
        const RESIZED   = 0b0000_0010;
        /// Options or slide content were updated.
        const UPDATED   = 0b0000_0100;
        /// Slides were added, removed, or re-measured.
        const REFRESHED = 0b0000_1000;
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveMove {
    index: isize,
    prev: isize,
    dest: isize,
    start_position: f64,
    // Resolved landing position; `finish` writes it.
    to: f64,
    generation: u64,
}

/// Computes and applies the position of a carousel list inside its track.
///
/// The mover owns the position (the last value written by
/// [`translate`](Self::translate)), the busy state, and its three
/// collaborators: the track [`Layout`], the [`Sequencer`] that decides which
/// slide is current, and the [`Transition`] driver that animates moves.
///
/// Notifications accumulate until the host calls [`drain_events`](Self::drain_events).
#[derive(Debug)]
pub struct Mover<L, S, T> {
    pub(crate) layout: L,
    pub(crate) sequencer: S,
    transition: T,
    pub(crate) options: MoverOptions,
    pub(crate) position: f64,
    state: MoveState,
    generation: u64,
    active: Option<ActiveMove>,
    events: SmallVec<[MoverEvent; 4]>,
}

impl<L, S, T> Mover<L, S, T> {
    /// Creates an idle mover at position `0.0`.
    ///
    /// Call [`mount`](Self::mount) once the layout is measured to snap to the
    /// sequencer's current index.
    #[must_use]
    pub fn new(layout: L, sequencer: S, transition: T, options: MoverOptions) -> Self {
        Self {
            layout,
            sequencer,
            transition,
            options,
            position: 0.0,
            state: MoveState::Idle,
            generation: 0,
            active: None,
            events: SmallVec::new(),
        }
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &MoverOptions {
        &self.options
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &L {
        &self.layout
    }

    /// Returns the layout for updates. Report the change with
    /// [`handle_layout_change`](Self::handle_layout_change) afterwards.
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    /// Returns the sequencer.
    #[must_use]
    pub const fn sequencer(&self) -> &S {
        &self.sequencer
    }

    /// Returns the sequencer for updates.
    pub fn sequencer_mut(&mut self) -> &mut S {
        &mut self.sequencer
    }

    /// Returns the transition driver.
    #[must_use]
    pub const fn transition(&self) -> &T {
        &self.transition
    }

    /// Returns the transition driver for updates.
    pub fn transition_mut(&mut self) -> &mut T {
        &mut self.transition
    }

    /// The current position: the last value applied by [`translate`](Self::translate).
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// The current position as a translation on the resolved axis.
    #[must_use]
    pub const fn translation(&self) -> Vec2 {
        self.options.direction.resolve().vector(self.position)
    }

    /// The current position as a transform to apply to the list.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation())
    }

    /// Busy/idle state.
    #[must_use]
    pub const fn state(&self) -> MoveState {
        self.state
    }

    /// Returns `true` while a move is in flight.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        matches!(self.state, MoveState::Moving)
    }

    /// Removes and returns the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MoverEvent> + '_ {
        self.events.drain(..)
    }
}

impl<L, S, T> Mover<L, S, T>
where
    L: Layout + SlideRegistry,
    S: Sequencer,
    T: Transition,
{
    /// Moves to `index`, coming from `prev`, where `dest` is the raw
    /// destination (a clone index when the move wraps in loop mode).
    ///
    /// Returns `Ok(false)` when the request was ignored under
    /// [`Overlap::Reject`]. Completion is reported later through
    /// [`finish`](Self::finish) or [`advance`](Self::advance).
    pub fn move_to(
        &mut self,
        dest: isize,
        index: isize,
        prev: isize,
    ) -> Result<bool, GeometryError> {
        if self.is_moving() && matches!(self.options.overlap, Overlap::Reject) {
            trace!(dest, index, prev, "move rejected while another is in flight");
            return Ok(false);
        }

        let start_position = self.position;
        let backwards = dest > prev;
        if dest != index && self.can_shift(backwards)? {
            self.cancel();
            let shifted = self.shift(self.position, backwards)?;
            self.translate(shifted, true)?;
        }

        let to = self.to_position(index, true);
        self.generation += 1;
        self.state = MoveState::Moving;
        self.active = Some(ActiveMove {
            index,
            prev,
            dest,
            start_position,
            to,
            generation: self.generation,
        });
        self.events.push(MoverEvent::Move { index, prev, dest });

        debug!(dest, index, prev, from = self.position, to, "move started");
        self.transition.start(TransitionRequest {
            index,
            from: self.position,
            to,
            ticket: MoveTicket::new(self.generation),
        });
        Ok(true)
    }

    /// Finalizes the move `ticket` belongs to and lands the list on the move's
    /// destination, whatever the driver last drew.
    ///
    /// Returns `None` for a ticket of a move that has been superseded.
    pub fn finish(&mut self, ticket: MoveTicket) -> Option<MoveOutcome> {
        let active = match self.active {
            Some(active) if active.generation == ticket.generation() => active,
            _ => {
                trace!(generation = ticket.generation(), "ignoring stale move completion");
                return None;
            }
        };
        self.active = None;
        self.state = MoveState::Idle;
        self.apply(active.to);

        let ActiveMove {
            index, prev, dest, ..
        } = active;
        self.events.push(MoverEvent::Moved { index, prev, dest });
        debug!(dest, index, prev, position = self.position, "move finished");

        let unchanged = (active.start_position - self.position).abs() < SETTLE_EPSILON;
        if matches!(self.options.trim_space, TrimSpace::Move) && dest != prev && unchanged {
            return Some(MoveOutcome::StepAgain {
                forward: dest > prev,
            });
        }
        Some(MoveOutcome::Settled { index, prev, dest })
    }

    /// Advances the transition driver to `now_ms` and applies what it reports.
    ///
    /// Returns the outcome when this call finished a move.
    pub fn advance(&mut self, now_ms: u64) -> Result<Option<MoveOutcome>, GeometryError> {
        match self.transition.tick(now_ms) {
            None => Ok(None),
            Some(TransitionStep::Frame(position)) => {
                self.translate(position, true)?;
                Ok(None)
            }
            Some(TransitionStep::Finished { position, ticket }) => {
                self.translate(position, true)?;
                Ok(self.finish(ticket))
            }
        }
    }

    /// Snaps to `index` without a transition.
    pub fn jump(&mut self, index: isize) -> Result<(), GeometryError> {
        let position = self.to_position(index, true);
        self.translate(position, false)
    }

    /// Applies `position`, wrapping it by whole cycles in loop mode unless
    /// `prevent_loop` is set. Does nothing for [`SliderKind::Fade`].
    pub fn translate(&mut self, position: f64, prevent_loop: bool) -> Result<(), GeometryError> {
        if matches!(self.options.kind, SliderKind::Fade) {
            return Ok(());
        }
        let destination = if prevent_loop {
            position
        } else {
            self.loop_position(position)?
        };
        self.apply(destination);
        if destination != position {
            debug!(from = position, to = destination, "position wrapped");
            self.events.push(MoverEvent::Shifted {
                from: position,
                to: destination,
            });
        }
        Ok(())
    }

    // Writes an already resolved position; never wraps.
    fn apply(&mut self, position: f64) {
        if !matches!(self.options.kind, SliderKind::Fade) {
            self.position = position;
        }
    }

    /// Stops the list where it is and aborts the transition in flight.
    ///
    /// The busy state is left alone; the next move to start owns it.
    pub fn cancel(&mut self) {
        // The stored position already is the last applied one, so the list
        // stops exactly where it was drawn.
        self.transition.cancel();
    }

    /// Snaps the list to the sequencer's current index after a layout change.
    ///
    /// Returns `Ok(false)` without doing anything while a move is in flight or
    /// the sequencer reports busy.
    pub fn reposition(&mut self) -> Result<bool, GeometryError> {
        if self.is_moving() || self.sequencer.is_busy() {
            trace!(moving = self.is_moving(), "reposition skipped while busy");
            return Ok(false);
        }
        self.sequencer.cancel_momentum();
        let index = self.sequencer.index();
        self.jump(index)?;
        self.events.push(MoverEvent::SlidesUpdated { index });
        debug!(index, position = self.position, "repositioned");
        Ok(true)
    }

    /// Repositions once for any number of simultaneous layout changes.
    pub fn handle_layout_change(&mut self, changes: LayoutChanges) -> Result<bool, GeometryError> {
        if changes.is_empty() {
            return Ok(false);
        }
        self.reposition()
    }

    /// Snaps to the sequencer's current index for the first time.
    pub fn mount(&mut self) -> Result<bool, GeometryError> {
        self.handle_layout_change(LayoutChanges::MOUNTED)
    }
}
