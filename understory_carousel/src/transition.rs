// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition drivers: the collaborators that carry the list to its destination.
//!
//! The mover decides *where* a move lands; a [`Transition`] decides *how* the
//! list gets there. Completion is reported by handing the request's
//! [`MoveTicket`] back to [`Mover::finish`](crate::Mover::finish), either
//! directly by the host or through [`Transition::tick`] and
//! [`Mover::advance`](crate::Mover::advance).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Proof that a particular move is in flight.
///
/// A ticket is neither `Clone` nor `Copy`, so a move can be finished at most
/// once. Tickets of moves that were superseded are ignored by the mover.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveTicket {
    generation: u64,
}

impl MoveTicket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Sequence number of the move this ticket belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// A request to animate the list toward a slide.
#[derive(Debug, PartialEq)]
pub struct TransitionRequest {
    /// Canonical index being moved to.
    pub index: isize,
    /// Position of the list when the request was made.
    pub from: f64,
    /// Trimmed position of `index`; where the list must come to rest.
    pub to: f64,
    /// Completion token for this move.
    pub ticket: MoveTicket,
}

/// Progress reported by a frame-driven [`Transition`].
#[derive(Debug, PartialEq)]
pub enum TransitionStep {
    /// The list should be drawn at this position.
    Frame(f64),
    /// The list reached `position` and the move identified by `ticket` is over.
    Finished {
        /// Final position.
        position: f64,
        /// Ticket of the finished move.
        ticket: MoveTicket,
    },
}

/// Drives the list from its current position to a requested destination.
pub trait Transition {
    /// Begins moving toward `request.to`, replacing any transition in flight.
    fn start(&mut self, request: TransitionRequest);

    /// Aborts the transition in flight, if any. Its ticket is dropped.
    fn cancel(&mut self);

    /// Advances a frame-driven transition to `now_ms`.
    ///
    /// Drivers that complete on their own (for example when the host animates
    /// with its own compositor) keep the default, which reports nothing.
    fn tick(&mut self, now_ms: u64) -> Option<TransitionStep> {
        let _ = now_ms;
        None
    }
}

/// Easing curve applied to a [`Tween`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-out: `1 - (1 - t)^3`.
    #[default]
    Cubic,
    /// Quintic ease-out: `1 - (1 - t)^5`.
    Quintic,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::Cubic => 1.0 - inv * inv * inv,
            Self::Quintic => 1.0 - inv * inv * inv * inv * inv,
        }
    }
}

/// Configuration of a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenConfig {
    /// Duration of a move in milliseconds. Zero snaps on the next tick.
    pub speed_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            speed_ms: 400,
            easing: Easing::Cubic,
        }
    }
}

#[derive(Debug)]
struct ActiveTween {
    from: f64,
    to: f64,
    // Stamped by the first tick; requests carry no clock.
    started: Option<u64>,
    duration: u64,
    ticket: MoveTicket,
}

/// A frame-driven [`Transition`] that interpolates positions over time.
///
/// Timestamps are supplied by the caller in milliseconds, so the driver works
/// with any clock (animation frames, a test counter, a simulation step).
///
/// ```rust
/// use understory_carousel::{Easing, Tween, TweenConfig};
///
/// let tween = Tween::new(TweenConfig { speed_ms: 100, easing: Easing::Linear });
/// assert!(!tween.is_running());
/// ```
#[derive(Debug, Default)]
pub struct Tween {
    config: TweenConfig,
    active: Option<ActiveTween>,
}

impl Tween {
    /// Creates an idle tween.
    #[must_use]
    pub fn new(config: TweenConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// Replaces the configuration; applies from the next request.
    pub fn set_config(&mut self, config: TweenConfig) {
        self.config = config;
    }

    /// Returns `true` while a request is being animated.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Destination of the running request, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.to)
    }
}

impl Transition for Tween {
    fn start(&mut self, request: TransitionRequest) {
        // Sub-unit hops are not worth animating.
        let duration = if (request.to - request.from).abs() < 1.0 {
            0
        } else {
            self.config.speed_ms
        };
        self.active = Some(ActiveTween {
            from: request.from,
            to: request.to,
            started: None,
            duration,
            ticket: request.ticket,
        });
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn tick(&mut self, now_ms: u64) -> Option<TransitionStep> {
        let anim = self.active.as_mut()?;
        let started = *anim.started.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(started);
        if elapsed < anim.duration {
            let t = elapsed as f64 / anim.duration as f64;
            let eased = self.config.easing.apply(t);
            return Some(TransitionStep::Frame(
                anim.from + (anim.to - anim.from) * eased,
            ));
        }
        let done = self.active.take()?;
        Some(TransitionStep::Finished {
            position: done.to,
            ticket: done.ticket,
        })
    }
}
