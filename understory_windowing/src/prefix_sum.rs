// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cumulative-size index over item sizes.

use alloc::vec::Vec;

/// Fenwick (binary indexed) tree of non-negative item sizes.
///
/// Supports the queries the windowing needs without rescanning the list on
/// every scroll tick:
///
/// | Operation | Time |
/// |-----------|------|
/// | [`PrefixSumIndex::from_sizes`] | O(n) |
/// | [`PrefixSumIndex::set`] | O(log n) |
/// | [`PrefixSumIndex::before`] | O(log n) |
/// | [`PrefixSumIndex::last_at_or_below`] | O(log n) |
/// | [`PrefixSumIndex::first_reaching`] | O(log n) |
/// | [`PrefixSumIndex::total`], [`PrefixSumIndex::get`] | O(1) |
///
/// All stored sizes must be finite and non-negative; the descent searches rely
/// on prefix sums being monotone.
#[derive(Clone, Debug, Default)]
pub struct PrefixSumIndex {
    /// 1-based Fenwick array; `tree[0]` is unused and absent when empty.
    tree: Vec<f64>,
    sizes: Vec<f64>,
    total: f64,
}

impl PrefixSumIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from per-item sizes in linear time.
    #[must_use]
    pub fn from_sizes(sizes: impl IntoIterator<Item = f64>) -> Self {
        let sizes: Vec<f64> = sizes.into_iter().collect();
        let n = sizes.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(0.0);
        tree.extend_from_slice(&sizes);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }
        let total = sizes.iter().sum();
        Self { tree, sizes, total }
    }

    /// Number of items indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if no items are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of all sizes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Size of item `index`, or `0.0` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.sizes.get(index).copied().unwrap_or(0.0)
    }

    /// Replaces the size of item `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, size: f64) {
        let Some(slot) = self.sizes.get_mut(index) else {
            return;
        };
        let delta = size - *slot;
        if delta == 0.0 {
            return;
        }
        *slot = size;
        self.total += delta;
        let n = self.sizes.len();
        let mut i = index + 1;
        while i <= n {
            self.tree[i] += delta;
            i += lowbit(i);
        }
    }

    /// Cumulative size of items strictly before `index`.
    ///
    /// `index` may equal `len()`, in which case this is the total.
    #[must_use]
    pub fn before(&self, index: usize) -> f64 {
        let mut i = index.min(self.sizes.len());
        if i == self.sizes.len() {
            return self.total;
        }
        let mut sum = 0.0;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }

    /// Largest `count` in `0..=len()` with `before(count) <= target`.
    #[must_use]
    pub fn last_at_or_below(&self, target: f64) -> usize {
        self.descend(target, |node, remaining| node <= remaining)
    }

    /// Smallest `count` in `0..=len()` with `before(count) >= target`, or
    /// `None` if even the total falls short.
    #[must_use]
    pub fn first_reaching(&self, target: f64) -> Option<usize> {
        if target <= 0.0 {
            return Some(0);
        }
        let below = self.descend(target, |node, remaining| node < remaining);
        let count = below + 1;
        (count <= self.sizes.len()).then_some(count)
    }

    /// Walks down the implicit tree, taking every node for which `take` holds.
    /// Returns the number of leading items taken.
    fn descend(&self, target: f64, take: impl Fn(f64, f64) -> bool) -> usize {
        let n = self.sizes.len();
        if n == 0 {
            return 0;
        }
        let mut pos = 0;
        let mut remaining = target;
        let mut step = 1_usize << (usize::BITS - 1 - n.leading_zeros());
        while step > 0 {
            let next = pos + step;
            if next <= n && take(self.tree[next], remaining) {
                pos = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        pos
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
