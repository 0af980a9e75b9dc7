// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a five-slide loop carousel forward across the wrap point.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel_loop`

use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_carousel::{
    Cursor, Direction, Easing, LayoutChanges, MoveOutcome, Mover, MoverEvent, MoverOptions,
    Padding, Sequencer, SlideExtents, TrackLayout, Tween, TweenConfig,
};

const SLIDES: isize = 5;
const FRAME_MS: u64 = 16;

type Carousel = Mover<TrackLayout, Cursor, Tween>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let layout = TrackLayout::new(SlideExtents::from_extents([240.0; 5]), 240.0)
        .with_gap(16.0)
        .with_padding(Padding {
            start: 24.0,
            end: 24.0,
        })
        .with_clones(2);
    let tween = Tween::new(TweenConfig {
        speed_ms: 320,
        easing: Easing::Quintic,
    });
    let mut carousel: Carousel = Mover::new(
        layout,
        Cursor::new(SLIDES - 1),
        tween,
        MoverOptions::looping(Direction::Ltr),
    );
    carousel.mount()?;
    report(&mut carousel);

    let mut now = 0;
    for _ in 0..7 {
        now = step_forward(&mut carousel, now)?;
    }

    // A drag past the last slide wraps onto the first one.
    carousel.jump(SLIDES - 1)?;
    carousel.sequencer_mut().index = SLIDES - 1;
    let past_end = carousel.to_position(SLIDES, false);
    carousel.translate(past_end, false)?;
    let landed = carousel.to_index(carousel.position());
    carousel.sequencer_mut().index = landed;
    info!(landed, "drag released");
    report(&mut carousel);

    // The host measured wider slides after a resize.
    carousel.layout_mut().set_list_size(320.0);
    carousel.layout_mut().extents_mut().rebuild([320.0; 5], &|v| *v);
    carousel.handle_layout_change(LayoutChanges::RESIZED)?;
    report(&mut carousel);
    Ok(())
}

/// Moves one slide forward, looping from the last slide onto the first.
fn step_forward(carousel: &mut Carousel, mut now: u64) -> Result<u64, Box<dyn std::error::Error>> {
    let prev = carousel.sequencer().index();
    let dest = prev + 1;
    let index = dest.rem_euclid(SLIDES);
    carousel.move_to(dest, index, prev)?;
    carousel.sequencer_mut().index = index;

    loop {
        now += FRAME_MS;
        if let Some(outcome) = carousel.advance(now)? {
            match outcome {
                MoveOutcome::Settled { .. } => {}
                MoveOutcome::StepAgain { forward } => {
                    info!(forward, "host would step again");
                }
            }
            break;
        }
    }
    report(carousel);
    Ok(now)
}

fn report(carousel: &mut Carousel) {
    let axis = carousel.options().direction.resolve();
    let offset = axis.component(carousel.translation());
    for event in carousel.drain_events() {
        match event {
            MoverEvent::Move { index, prev, dest } => info!(index, prev, dest, "move"),
            MoverEvent::Moved { index, .. } => info!(index, offset, "moved"),
            MoverEvent::Shifted { from, to } => info!(from, to, "shifted"),
            MoverEvent::SlidesUpdated { index } => {
                info!(index, offset, "slides updated");
            }
        }
    }
}
