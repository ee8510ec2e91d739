// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extent models: where each item sits along the scroll axis.

use crate::PrefixSumIndex;

/// A dense strip of items `0..len` with non-negative extents.
///
/// The windowing computation only talks to this trait, so fixed-size lists
/// answer every query with index arithmetic while variable-size lists go
/// through a [`PrefixSumIndex`].
pub trait ExtentModel {
    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all extents.
    fn total_extent(&self) -> f64;

    /// Extent of item `index`.
    fn extent_of(&self, index: usize) -> f64;

    /// Offset of the leading edge of item `index`, i.e. the cumulative extent
    /// of all items before it. `index == len` yields the total.
    fn offset_of(&self, index: usize) -> f64;

    /// Largest index `i < len` whose leading edge is at or before `offset`.
    ///
    /// Returns `0` for an empty model.
    fn index_at_offset(&self, offset: f64) -> usize;

    /// Smallest `end >= start` such that items `start..=end` span at least
    /// `span`, or the last index when the rest of the list is shorter.
    fn last_index_covering(&self, start: usize, span: f64) -> usize;
}

/// Every item has the same extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedExtents {
    /// Number of items.
    pub len: usize,
    /// Extent of each item; expected to be positive.
    pub extent: f64,
}

impl FixedExtents {
    /// Creates a fixed-extent model.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        Self { len, extent }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "offset / extent is non-negative; the saturating cast is clamped to the item range"
)]
fn floor_to_index(value: f64) -> usize {
    value as usize
}

impl ExtentModel for FixedExtents {
    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&self) -> f64 {
        self.extent * self.len as f64
    }

    fn extent_of(&self, index: usize) -> f64 {
        if index < self.len { self.extent } else { 0.0 }
    }

    fn offset_of(&self, index: usize) -> f64 {
        self.extent * index.min(self.len) as f64
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        if self.len == 0 {
            return 0;
        }
        if self.extent <= 0.0 {
            return self.len - 1;
        }
        floor_to_index(offset.max(0.0) / self.extent).min(self.len - 1)
    }

    fn last_index_covering(&self, start: usize, span: f64) -> usize {
        if self.len == 0 {
            return 0;
        }
        let last = self.len - 1;
        if self.extent <= 0.0 {
            return last;
        }
        let ratio = span.max(0.0) / self.extent;
        let mut count = floor_to_index(ratio);
        if (count as f64) < ratio {
            count += 1;
        }
        start.saturating_add(count.max(1) - 1).min(last)
    }
}

impl ExtentModel for PrefixSumIndex {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn total_extent(&self) -> f64 {
        self.total()
    }

    fn extent_of(&self, index: usize) -> f64 {
        self.get(index)
    }

    fn offset_of(&self, index: usize) -> f64 {
        self.before(index)
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        let len = Self::len(self);
        if len == 0 {
            return 0;
        }
        self.last_at_or_below(offset).min(len - 1)
    }

    fn last_index_covering(&self, start: usize, span: f64) -> usize {
        let len = Self::len(self);
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        let start = start.min(last);
        let target = self.before(start) + span.max(0.0);
        match self.first_reaching(target) {
            Some(count) => count.saturating_sub(1).clamp(start, last),
            None => last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtentModel, FixedExtents};
    use crate::PrefixSumIndex;

    #[test]
    fn fixed_index_arithmetic() {
        let model = FixedExtents::new(1000, 20.0);
        assert_eq!(model.total_extent(), 20_000.0);
        assert_eq!(model.index_at_offset(205.0), 10);
        assert_eq!(model.index_at_offset(200.0), 10);
        assert_eq!(model.index_at_offset(199.9), 9);
        assert_eq!(model.index_at_offset(1e9), 999);
        assert_eq!(model.last_index_covering(10, 100.0), 14);
        assert_eq!(model.last_index_covering(10, 101.0), 15);
        assert_eq!(model.last_index_covering(10, 0.0), 10);
        assert_eq!(model.last_index_covering(998, 100.0), 999);
    }

    #[test]
    fn fixed_and_prefix_sum_agree() {
        let fixed = FixedExtents::new(37, 8.0);
        let indexed = PrefixSumIndex::from_sizes([8.0; 37]);
        for offset in [0.0, 3.0, 8.0, 100.0, 295.0, 296.0, 500.0] {
            assert_eq!(
                fixed.index_at_offset(offset),
                indexed.index_at_offset(offset),
                "index_at_offset({offset})"
            );
        }
        for start in [0, 5, 30, 36] {
            for span in [0.0, 1.0, 8.0, 9.0, 64.0, 1000.0] {
                assert_eq!(
                    fixed.last_index_covering(start, span),
                    indexed.last_index_covering(start, span),
                    "last_index_covering({start}, {span})"
                );
            }
        }
    }

    #[test]
    fn empty_models() {
        let fixed = FixedExtents::new(0, 10.0);
        let indexed = PrefixSumIndex::new();
        assert!(fixed.is_empty());
        assert!(ExtentModel::is_empty(&indexed));
        assert_eq!(fixed.index_at_offset(5.0), 0);
        assert_eq!(indexed.last_index_covering(0, 5.0), 0);
    }
}
