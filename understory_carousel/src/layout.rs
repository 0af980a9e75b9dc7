// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry consumed by the mover.

use core::ops::Range;

use crate::SlideExtents;

/// Geometry queries over the slides of a track.
///
/// All sizes are measured along the slide axis, in the same units as positions.
/// Implementations answer from the current layout on every call; the mover
/// never caches the results across layout changes.
pub trait Layout {
    /// Size of slide `index`, optionally including the gap that follows it.
    fn slide_size(&self, index: isize, with_gap: bool) -> f64;

    /// Padding at the leading (`is_end == false`) or trailing edge of the track.
    fn padding(&self, is_end: bool) -> f64;

    /// Distance from the list's leading edge to the trailing edge of slide `index`.
    ///
    /// Includes the gap after `index` unless `without_gap` is set. Indices before
    /// the first slide yield `0.0`.
    fn total_size(&self, index: isize, without_gap: bool) -> f64;

    /// Size of the visible list (the viewport the slides move through).
    fn list_size(&self) -> f64;

    /// Size of one full pass through the real slides; the loop wrap period.
    fn slider_size(&self, without_gap: bool) -> f64;

    /// Full rendered length of the list, clones included.
    fn scroll_size(&self) -> f64;

    /// Outer size of the track: the list plus both paddings.
    fn track_size(&self) -> f64 {
        self.list_size() + self.padding(false) + self.padding(true)
    }
}

/// Ordered view of the slides a track holds.
pub trait SlideRegistry {
    /// Indices of all slides, clones included, in ascending order.
    fn slide_indices(&self) -> impl Iterator<Item = isize> + '_;
}

/// Padding inside the track at each edge along the slide axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Leading edge.
    pub start: f64,
    /// Trailing edge.
    pub end: f64,
}

/// A [`Layout`] for a track of real slides with optional clones on each side.
///
/// Clones mirror the real slides: slide `i` has the extent of real slide
/// `i.rem_euclid(len)`. Leading clones take the indices `-clones..0` and
/// trailing clones `len..len + clones`. The list's leading edge is the leading
/// edge of the first leading clone.
///
/// ```rust
/// use understory_carousel::{Layout, SlideExtents, TrackLayout};
///
/// let layout = TrackLayout::new(SlideExtents::from_extents([100.0; 5]), 300.0).with_gap(10.0);
/// assert_eq!(layout.slider_size(false), 550.0);
/// assert_eq!(layout.total_size(1, false), 220.0);
/// ```
#[derive(Clone, Debug)]
pub struct TrackLayout {
    extents: SlideExtents,
    gap: f64,
    padding: Padding,
    list_size: f64,
    clones: usize,
}

impl TrackLayout {
    /// Creates a layout with no gap, padding, or clones.
    #[must_use]
    pub fn new(extents: SlideExtents, list_size: f64) -> Self {
        Self {
            extents,
            gap: 0.0,
            padding: Padding::default(),
            list_size: list_size.max(0.0),
            clones: 0,
        }
    }

    /// Sets the gap between adjacent slides.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.set_gap(gap);
        self
    }

    /// Sets the track padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the number of clones placed on each side of the real slides.
    #[must_use]
    pub fn with_clones(mut self, clones: usize) -> Self {
        self.clones = clones;
        self
    }

    /// Returns the real slide extents.
    #[must_use]
    pub fn extents(&self) -> &SlideExtents {
        &self.extents
    }

    /// Returns the real slide extents for updating after measurement.
    pub fn extents_mut(&mut self) -> &mut SlideExtents {
        &mut self.extents
    }

    /// Updates the visible list size, for example after a resize.
    pub fn set_list_size(&mut self, list_size: f64) {
        self.list_size = list_size.max(0.0);
    }

    /// Updates the gap between adjacent slides.
    pub fn set_gap(&mut self, gap: f64) {
        self.gap = gap.max(0.0);
    }

    /// Updates the track padding.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Updates the number of clones on each side.
    pub fn set_clones(&mut self, clones: usize) {
        self.clones = clones;
    }

    /// Number of clones on each side.
    #[must_use]
    pub const fn clones(&self) -> usize {
        self.clones
    }

    /// The gap between adjacent slides.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    fn real_len(&self) -> isize {
        isize::try_from(self.extents.len()).unwrap_or(isize::MAX)
    }

    fn first_index(&self) -> isize {
        -isize::try_from(self.clones).unwrap_or(isize::MAX)
    }

    fn cycle(&self) -> f64 {
        self.extents.total() + self.gap * self.extents.len() as f64
    }

    // Sum of slide sizes (gaps included) from real slide 0 up to, not including, `k`.
    // Negative `k` counts backwards through leading clones.
    fn cumulative(&self, k: isize) -> f64 {
        let len = self.real_len();
        if len == 0 {
            return 0.0;
        }
        let cycles = k.div_euclid(len);
        let rem = k.rem_euclid(len).unsigned_abs();
        cycles as f64 * self.cycle() + self.extents.offset_at(rem) + self.gap * rem as f64
    }
}

impl Layout for TrackLayout {
    fn slide_size(&self, index: isize, with_gap: bool) -> f64 {
        let len = self.real_len();
        if len == 0 {
            return 0.0;
        }
        let extent = self.extents.extent_at(index.rem_euclid(len).unsigned_abs());
        if with_gap { extent + self.gap } else { extent }
    }

    fn padding(&self, is_end: bool) -> f64 {
        if is_end {
            self.padding.end
        } else {
            self.padding.start
        }
    }

    fn total_size(&self, index: isize, without_gap: bool) -> f64 {
        let first = self.first_index();
        if self.real_len() == 0 || index < first {
            return 0.0;
        }
        let span = self.cumulative(index + 1) - self.cumulative(first);
        if without_gap { span - self.gap } else { span }
    }

    fn list_size(&self) -> f64 {
        self.list_size
    }

    fn slider_size(&self, without_gap: bool) -> f64 {
        if self.extents.is_empty() {
            return 0.0;
        }
        if without_gap {
            self.cycle() - self.gap
        } else {
            self.cycle()
        }
    }

    fn scroll_size(&self) -> f64 {
        let last = self.real_len() - self.first_index() - 1;
        self.total_size(last, true)
    }
}

impl SlideRegistry for TrackLayout {
    fn slide_indices(&self) -> impl Iterator<Item = isize> + '_ {
        let indices: Range<isize> = if self.extents.is_empty() {
            0..0
        } else {
            self.first_index()..self.real_len() - self.first_index()
        };
        indices
    }
}
