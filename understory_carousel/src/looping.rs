// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic wrap of positions in loop mode.
//!
//! A loop carousel renders clones of its slides on both sides, so any position
//! can be replaced by one a whole number of cycles away without a visible
//! change. The cycle length is [`Layout::slider_size`] with gaps.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use tracing::trace;

use crate::{GeometryError, Layout, Mover, Sequencer, SlideRegistry};

impl<L, S, T> Mover<L, S, T>
where
    L: Layout + SlideRegistry,
    S: Sequencer,
{
    /// Moves `position` back (`backwards == true`) or forward by whole cycles.
    ///
    /// The distance to the corresponding limit decides how many cycles; at
    /// least one cycle is always applied, so a position sitting exactly on a
    /// limit still wraps. Shifting back and then forward returns the original
    /// position modulo the cycle length.
    pub fn shift(&self, position: f64, backwards: bool) -> Result<f64, GeometryError> {
        let size = GeometryError::check_cycle(self.layout.slider_size(false))?;
        let excess = position - self.limit(backwards);
        let cycles = (excess.abs() / size).ceil().max(1.0);
        let sign = if backwards { 1.0 } else { -1.0 };
        Ok(position - self.options.direction.orient(size * cycles) * sign)
    }

    /// Wraps `position` onto the opposite side when it passes a limit while
    /// heading away from the current position. Identity outside loop mode.
    pub fn loop_position(&self, position: f64) -> Result<f64, GeometryError> {
        if !self.options.is_loop() {
            return Ok(position);
        }
        let diff = self.options.direction.orient(position - self.position);
        let exceeded_min = diff < 0.0 && self.exceeded_limit(Some(false), Some(position));
        let exceeded_max = diff > 0.0 && self.exceeded_limit(Some(true), Some(position));
        if exceeded_min || exceeded_max {
            trace!(position, exceeded_max, "position passed a loop limit");
            return self.shift(position, exceeded_max);
        }
        Ok(position)
    }

    /// Returns `true` if shifting the current position by one cycle keeps the
    /// list inside its rendered extent (clones included).
    pub fn can_shift(&self, backwards: bool) -> Result<bool, GeometryError> {
        let shifted = self
            .options
            .direction
            .orient(self.shift(self.position, backwards)?);
        Ok(if backwards {
            shifted >= 0.0
        } else {
            shifted <= self.layout.scroll_size() - self.layout.track_size()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{loop_mover, mover, track};
    use crate::{Direction, GeometryError, MoverEvent, MoverOptions, SlideExtents, TrackLayout};

    #[test]
    fn forward_overrun_wraps_by_one_cycle() {
        // Five slides of 100 and end index 5 put the max limit at 500.
        let mut m = mover(track(5, 100.0, 100.0), 5, MoverOptions::looping(Direction::Rtl));
        m.translate(480.0, true).unwrap();

        assert_eq!(m.limit(true), 500.0);
        assert_eq!(m.shift(520.0, true), Ok(20.0));
        assert_eq!(m.loop_position(520.0), Ok(20.0));

        m.translate(520.0, false).unwrap();
        assert_eq!(m.position(), 20.0);
        assert_eq!(
            m.drain_events().collect::<alloc::vec::Vec<_>>(),
            [MoverEvent::Shifted {
                from: 520.0,
                to: 20.0
            }]
        );
    }

    #[test]
    fn large_overruns_wrap_by_several_cycles() {
        let m = mover(track(5, 100.0, 100.0), 5, MoverOptions::looping(Direction::Rtl));
        // 1_700 is 1_200 past the max limit: three cycles.
        assert_eq!(m.shift(1_700.0, true), Ok(200.0));
        // -1_200 is 1_200 before the min limit: three cycles forward.
        assert_eq!(m.shift(-1_200.0, false), Ok(300.0));
    }

    #[test]
    fn shift_is_a_bijection_modulo_the_cycle() {
        for direction in [Direction::Ltr, Direction::Rtl, Direction::Ttb] {
            let m = loop_mover(direction);
            let cycle = 500.0;
            for p in [-950.0, -600.0, -200.0, 0.0, 130.0, 777.0] {
                let there = m.shift(p, true).unwrap();
                let back = m.shift(there, false).unwrap();
                let residue = (back - p).rem_euclid(cycle);
                assert!(residue < 1e-9 || cycle - residue < 1e-9, "{direction:?} {p}");
            }
        }
    }

    #[test]
    fn loop_only_wraps_when_heading_past_a_limit() {
        // Ltr, two clones per side: index 0 rests at -200, index 4 at -600.
        let mut m = loop_mover(Direction::Ltr);
        m.jump(4).unwrap();
        assert_eq!(m.position(), -600.0);

        // Heading forward past the max limit wraps back one cycle.
        assert_eq!(m.loop_position(-650.0), Ok(-150.0));
        // Heading backward inside the limits is left alone.
        assert_eq!(m.loop_position(-550.0), Ok(-550.0));

        // Past the min limit but heading forward: no wrap.
        m.translate(-100.0, true).unwrap();
        assert_eq!(m.loop_position(-150.0), Ok(-150.0));
        // Past the min limit and heading backward: wraps forward.
        assert_eq!(m.loop_position(-50.0), Ok(-550.0));
    }

    #[test]
    fn loop_is_identity_for_bounded_sliders() {
        let m = mover(track(5, 100.0, 100.0), 4, MoverOptions::default());
        assert_eq!(m.loop_position(-10_000.0), Ok(-10_000.0));
    }

    #[test]
    fn can_shift_respects_rendered_extent() {
        let mut m = loop_mover(Direction::Ltr);
        // At index 4 one cycle back lands on clone -1 at -100.
        m.jump(4).unwrap();
        assert_eq!(m.can_shift(true), Ok(true));
        // One cycle forward would need 1_100 of travel; only 800 is rendered.
        assert_eq!(m.can_shift(false), Ok(false));

        m.jump(0).unwrap();
        assert_eq!(m.can_shift(false), Ok(true));
        assert_eq!(m.can_shift(true), Ok(false));
    }

    #[test]
    fn empty_loop_is_a_configuration_error() {
        let layout = TrackLayout::new(SlideExtents::new(), 100.0);
        let m = mover(layout, 0, MoverOptions::looping(Direction::Ltr));
        assert_eq!(
            m.shift(10.0, true),
            Err(GeometryError::DegenerateCycle { size: 0.0 })
        );
    }
}
