// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sequencing controller as seen by the mover.

/// The component that decides which slide is current and when to move.
///
/// The mover only asks it questions; it never changes the index itself.
pub trait Sequencer {
    /// The last index the carousel can come to rest on.
    fn end_index(&self) -> isize;

    /// The current canonical (non-clone) index.
    fn index(&self) -> isize;

    /// Returns `true` while something outside the mover owns the position,
    /// such as an active drag or a momentum scroll.
    fn is_busy(&self) -> bool {
        false
    }

    /// Stops any momentum scroll the host is running.
    fn cancel_momentum(&mut self) {}
}

/// A [`Sequencer`] that simply stores its answers.
///
/// Useful for hosts that track the index themselves and only need the mover's
/// geometry and transition handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Current canonical index.
    pub index: isize,
    /// Last reachable index.
    pub end: isize,
    /// External busy flag reported through [`Sequencer::is_busy`].
    pub busy: bool,
}

impl Cursor {
    /// Creates a cursor at index `0` over `0..=end`.
    #[must_use]
    pub const fn new(end: isize) -> Self {
        Self {
            index: 0,
            end,
            busy: false,
        }
    }

    /// Returns the cursor moved to `index`.
    #[must_use]
    pub const fn at(mut self, index: isize) -> Self {
        self.index = index;
        self
    }
}

impl Sequencer for Cursor {
    fn end_index(&self) -> isize {
        self.end
    }

    fn index(&self) -> isize {
        self.index
    }

    fn is_busy(&self) -> bool {
        self.busy
    }
}
