// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slide extents backed by eagerly maintained prefix sums.

use alloc::vec::Vec;

/// Extents of the real (non-clone) slides of a track, in strip order.
///
/// Every mutation rebuilds the prefix sums from the first changed slide onward,
/// so geometry queries stay `&self`. Carousels hold few slides and change them
/// rarely; queries happen on every frame.
#[derive(Clone, Debug)]
pub struct SlideExtents {
    extents: Vec<f64>,
    // `starts[i]` is the sum of `extents[..i]`; one longer than `extents`.
    starts: Vec<f64>,
}

impl Default for SlideExtents {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideExtents {
    /// Creates an empty set of extents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extents: Vec::new(),
            starts: alloc::vec![0.0],
        }
    }

    /// Creates extents from a sequence of sizes.
    #[must_use]
    pub fn from_extents(extents: impl IntoIterator<Item = f64>) -> Self {
        let mut this = Self::new();
        this.rebuild(extents, &|extent| *extent);
        this
    }

    /// Rebuilds the extents from a sequence of items and a size function.
    ///
    /// Any previous extents are discarded.
    pub fn rebuild<T, I>(&mut self, items: I, size_fn: &dyn Fn(&T) -> f64)
    where
        I: IntoIterator<Item = T>,
    {
        self.extents.clear();
        for item in items {
            self.extents.push(sanitize(size_fn(&item)));
        }
        self.refresh_from(0);
    }

    /// Resizes to `len` slides. New slides receive extent `0.0`.
    pub fn set_len(&mut self, len: usize) {
        let from = self.extents.len().min(len);
        self.extents.resize(len, 0.0);
        self.refresh_from(from);
    }

    /// Updates the extent of slide `index`, growing the set if needed.
    pub fn set_extent(&mut self, index: usize, extent: f64) {
        let from = index.min(self.extents.len());
        if index >= self.extents.len() {
            self.extents.resize(index + 1, 0.0);
        }
        self.extents[index] = sanitize(extent);
        self.refresh_from(from);
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Extent of slide `index`, or `0.0` past the end.
    #[must_use]
    pub fn extent_at(&self, index: usize) -> f64 {
        self.extents.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of the extents of the slides before `index`, clamped to the total.
    #[must_use]
    pub fn offset_at(&self, index: usize) -> f64 {
        let i = index.min(self.extents.len());
        self.starts.get(i).copied().unwrap_or(0.0)
    }

    /// Sum of all extents.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.offset_at(self.extents.len())
    }

    fn refresh_from(&mut self, from: usize) {
        let len = self.extents.len();
        self.starts.resize(len + 1, 0.0);
        let from = from.min(len);
        let mut pos = self.starts[from];
        for i in from..len {
            self.starts[i] = pos;
            pos += self.extents[i];
        }
        self.starts[len] = pos;
    }
}

fn sanitize(extent: f64) -> f64 {
    // Extents are expected to be finite. Catch NaNs (and infinities) in
    // debug builds so misuse does not go unnoticed.
    debug_assert!(
        extent.is_finite(),
        "SlideExtents extents must be finite; got {extent:?}"
    );
    // Clamp finite negative values to `0.0`.
    if extent.is_sign_negative() {
        0.0
    } else {
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::SlideExtents;

    #[test]
    fn grows_and_reports_offsets() {
        let mut extents = SlideExtents::new();
        extents.set_len(3);
        extents.set_extent(0, 10.0);
        extents.set_extent(1, 20.0);
        extents.set_extent(2, 30.0);

        assert_eq!(extents.len(), 3);
        assert_eq!(extents.total(), 60.0);
        assert_eq!(extents.offset_at(0), 0.0);
        assert_eq!(extents.offset_at(1), 10.0);
        assert_eq!(extents.offset_at(2), 30.0);
        assert_eq!(extents.offset_at(9), 60.0);
        assert_eq!(extents.extent_at(1), 20.0);
        assert_eq!(extents.extent_at(5), 0.0);
    }

    #[test]
    fn updating_a_middle_slide_shifts_later_offsets() {
        let mut extents = SlideExtents::from_extents([100.0, 100.0, 100.0, 100.0]);
        assert_eq!(extents.offset_at(3), 300.0);

        extents.set_extent(1, 150.0);
        assert_eq!(extents.offset_at(1), 100.0);
        assert_eq!(extents.offset_at(2), 250.0);
        assert_eq!(extents.offset_at(3), 350.0);
        assert_eq!(extents.total(), 450.0);

        extents.set_len(2);
        assert_eq!(extents.total(), 250.0);
    }

    #[test]
    fn negative_extents_are_clamped_to_zero() {
        let mut extents = SlideExtents::new();
        extents.set_extent(1, -5.0);
        assert_eq!(extents.len(), 2);
        assert_eq!(extents.extent_at(1), 0.0);
        assert_eq!(extents.total(), 0.0);
    }

    #[test]
    fn rebuild_discards_previous_extents() {
        let mut extents = SlideExtents::from_extents([1.0, 2.0, 3.0]);
        let items = [10_u32, 20];
        extents.rebuild(items, &|v| f64::from(*v));
        assert_eq!(extents.len(), 2);
        assert_eq!(extents.total(), 30.0);
        assert!(!extents.is_empty());
    }
}
