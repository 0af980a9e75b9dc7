// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between slide indices and list positions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{Focus, Layout, Mover, Sequencer, SlideRegistry};

impl<L, S, T> Mover<L, S, T>
where
    L: Layout + SlideRegistry,
    S: Sequencer,
{
    /// Position at which slide `index` is in focus.
    ///
    /// With `trimming`, bounded carousels that trim their edges clamp the result
    /// so no empty space shows before the first or after the last slide.
    #[must_use]
    pub fn to_position(&self, index: isize, trimming: bool) -> f64 {
        let position = self
            .options
            .direction
            .orient(self.layout.total_size(index - 1, false) - self.focus_offset(index));
        if trimming { self.trim(position) } else { position }
    }

    /// Index of the slide whose trimmed position is nearest to `position`.
    ///
    /// Slides are scanned in ascending order and the scan stops as soon as the
    /// distance grows; on a tie the lower index wins. Positions are monotonic
    /// in the index for non-negative extents and focus fractions in `0..=1`,
    /// which makes the distance unimodal. Trimmed edges form plateaus of equal
    /// distance, so ties keep the scan going instead of ending it.
    #[must_use]
    pub fn to_index(&self, position: f64) -> isize {
        let mut index = 0;
        let mut min_distance = f64::INFINITY;
        for candidate in self.layout.slide_indices() {
            let distance = (self.to_position(candidate, true) - position).abs();
            if distance < min_distance {
                min_distance = distance;
                index = candidate;
            } else if distance > min_distance {
                break;
            }
        }
        index
    }

    /// Position of the first (`max == false`) or last reachable slide.
    ///
    /// Recomputed from the current layout on every call.
    #[must_use]
    pub fn limit(&self, max: bool) -> f64 {
        let index = if max { self.sequencer.end_index() } else { 0 };
        self.to_position(index, self.options.trim_space.is_enabled())
    }

    /// Returns `true` if `position` (the current position when `None`) lies
    /// beyond a limit.
    ///
    /// `Some(true)` tests only the max limit, `Some(false)` only the min limit,
    /// and `None` tests both. Comparisons are made on oriented distances, so
    /// "beyond" means past the first or last slide in reading order.
    #[must_use]
    pub fn exceeded_limit(&self, max: Option<bool>, position: Option<f64>) -> bool {
        let orient = |value: f64| self.options.direction.orient(value);
        let position = orient(position.unwrap_or(self.position));
        let exceeded_min = max != Some(true) && position < orient(self.limit(false));
        let exceeded_max = max != Some(false) && position > orient(self.limit(true));
        exceeded_min || exceeded_max
    }

    fn trim(&self, position: f64) -> f64 {
        if !self.options.trims() {
            return position;
        }
        let far = self
            .options
            .direction
            .orient(self.layout.slider_size(true) - self.layout.list_size());
        // `far` is negative when the list moves toward negative coordinates.
        let (lo, hi) = if far < 0.0 { (far, 0.0) } else { (0.0, far) };
        position.clamp(lo, hi)
    }

    fn focus_offset(&self, index: isize) -> f64 {
        match self.options.focus {
            Focus::Start => 0.0,
            Focus::Center => (self.layout.list_size() - self.layout.slide_size(index, false)) / 2.0,
            Focus::Fraction(fraction) => fraction * self.layout.slide_size(index, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{mover, track};
    use crate::{Direction, Focus, MoverOptions, SliderKind, TrimSpace};

    fn untrimmed(direction: Direction) -> MoverOptions {
        MoverOptions {
            direction,
            ..MoverOptions::default()
        }
        .with_trim_space(TrimSpace::Off)
    }

    #[test]
    fn uniform_start_aligned_positions() {
        // Rtl orients positively, so positions read as plain distances.
        let m = mover(track(5, 100.0, 300.0), 4, untrimmed(Direction::Rtl));
        assert_eq!(m.to_position(0, false), 0.0);
        assert_eq!(m.to_position(4, false), 400.0);
        assert_eq!(m.limit(true), 400.0);
        assert_eq!(m.limit(false), 0.0);

        let m = mover(track(5, 100.0, 300.0), 4, untrimmed(Direction::Ltr));
        assert_eq!(m.to_position(4, true), -400.0);
    }

    #[test]
    fn index_round_trip_for_uniform_slides() {
        for direction in [Direction::Ltr, Direction::Rtl, Direction::Ttb] {
            let m = mover(track(6, 80.0, 200.0), 5, untrimmed(direction));
            for i in 0..6 {
                assert_eq!(m.to_index(m.to_position(i, true)), i, "{direction:?} index {i}");
            }
        }
    }

    #[test]
    fn to_index_picks_nearest_and_lower_on_ties() {
        let m = mover(track(5, 100.0, 300.0), 4, untrimmed(Direction::Rtl));
        assert_eq!(m.to_index(140.0), 1);
        assert_eq!(m.to_index(160.0), 2);
        // Exactly between 1 and 2.
        assert_eq!(m.to_index(150.0), 1);
        assert_eq!(m.to_index(-1_000.0), 0);
        assert_eq!(m.to_index(10_000.0), 4);
    }

    #[test]
    fn trimming_saturates_at_both_edges() {
        // Content 500, list 300: the list can travel at most 200.
        let options = MoverOptions::default().with_focus(Focus::Center);
        let m = mover(track(5, 100.0, 300.0), 4, options);
        assert_eq!(m.to_position(0, false), 100.0);
        assert_eq!(m.to_position(0, true), 0.0);
        assert_eq!(m.to_position(2, true), -100.0);
        assert_eq!(m.to_position(4, false), -300.0);
        assert_eq!(m.to_position(4, true), -200.0);

        // Saturated edges resolve to the lowest matching index.
        assert_eq!(m.to_index(-200.0), 3);
        assert_eq!(m.to_index(0.0), 0);
    }

    #[test]
    fn loop_kind_ignores_trimming() {
        let options = MoverOptions::looping(Direction::Ltr).with_focus(Focus::Center);
        let m = mover(track(5, 100.0, 300.0), 4, options);
        assert_eq!(m.options().kind, SliderKind::Loop);
        assert_eq!(m.to_position(0, true), 100.0);
    }

    #[test]
    fn fractional_focus_includes_the_gap() {
        let mut layout = track(4, 100.0, 250.0);
        layout.set_gap(20.0);
        let options = untrimmed(Direction::Rtl).with_focus(Focus::Fraction(0.5));
        let m = mover(layout, 3, options);
        assert_eq!(m.to_position(1, false), 120.0 - 60.0);
    }

    #[test]
    fn exceeded_limit_boundaries() {
        for direction in [Direction::Ltr, Direction::Rtl] {
            let m = mover(track(5, 100.0, 300.0), 4, untrimmed(direction));
            let max = m.limit(true);
            let min = m.limit(false);
            let eps = direction.orient(0.5);
            assert!(!m.exceeded_limit(Some(true), Some(max)));
            assert!(m.exceeded_limit(Some(true), Some(max + eps)));
            assert!(!m.exceeded_limit(Some(false), Some(min)));
            assert!(m.exceeded_limit(Some(false), Some(min - eps)));

            // Each side is only tested when asked for.
            assert!(!m.exceeded_limit(Some(false), Some(max + eps)));
            assert!(!m.exceeded_limit(Some(true), Some(min - eps)));
            assert!(m.exceeded_limit(None, Some(max + eps)));
            assert!(m.exceeded_limit(None, Some(min - eps)));
            // Defaults to the current position, which starts at 0.
            assert!(!m.exceeded_limit(None, None));
        }
    }
}
