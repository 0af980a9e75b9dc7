// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixtures shared by the unit tests.

use alloc::vec::Vec;

use crate::{
    Cursor, Direction, MoveTicket, Mover, MoverOptions, SlideExtents, TrackLayout, Transition,
    TransitionRequest,
};

/// A transition driver that records calls and holds the latest ticket.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Call>,
    pub(crate) ticket: Option<MoveTicket>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Call {
    Start { index: isize, from: f64, to: f64 },
    Cancel,
}

impl Recorder {
    pub(crate) fn take_ticket(&mut self) -> MoveTicket {
        self.ticket.take().expect("a move should be in flight")
    }
}

impl Transition for Recorder {
    fn start(&mut self, request: TransitionRequest) {
        self.calls.push(Call::Start {
            index: request.index,
            from: request.from,
            to: request.to,
        });
        self.ticket = Some(request.ticket);
    }

    fn cancel(&mut self) {
        self.calls.push(Call::Cancel);
        self.ticket = None;
    }
}

pub(crate) type TestMover = Mover<TrackLayout, Cursor, Recorder>;

/// `count` uniform slides inside a list of `list_size`, no clones.
pub(crate) fn track(count: usize, extent: f64, list_size: f64) -> TrackLayout {
    TrackLayout::new(
        SlideExtents::from_extents(core::iter::repeat_n(extent, count)),
        list_size,
    )
}

pub(crate) fn mover(layout: TrackLayout, end: isize, options: MoverOptions) -> TestMover {
    Mover::new(layout, Cursor::new(end), Recorder::default(), options)
}

/// Five slides of 100 in a list of 100 with two clones per side, index 0 mounted.
pub(crate) fn loop_mover(direction: Direction) -> TestMover {
    let layout = track(5, 100.0, 100.0).with_clones(2);
    let mut m = mover(layout, 4, MoverOptions::looping(direction));
    m.mount().expect("loop geometry is valid");
    m.drain_events().for_each(drop);
    m
}
