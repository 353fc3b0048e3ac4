//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Disjoint sets of core ranges.

use crate::coord::{CoreCoord, CoreOrder};
use crate::descriptor::RangeDescriptor;
use crate::merge;
use crate::range::CoreRange;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

/// A set of pairwise disjoint [`CoreRange`]s describing an arbitrary group of cores.
///
/// A `CoreRangeSet` is never modified in place. [`merge`](Self::merge) and the other
/// set operations return a new set, leaving the receiver untouched, so a set can be
/// shared freely between threads building independent workloads.
///
/// Ranges are kept in their `(start, end)` order, which is also the order of
/// [`descriptors`](Self::descriptors) and of iteration.
///
/// # Examples
///
/// ```rust
/// use corerange::{CoreCoord, CoreRange, CoreRangeSet};
///
/// let block = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(1, 1)).unwrap();
/// let set = CoreRangeSet::from(block).merge([CoreCoord::new(0, 2), CoreCoord::new(1, 2)]);
///
/// let expected = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(1, 2)).unwrap();
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![expected]);
/// assert_eq!(set.num_cores(), 6);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<CoreRange>", into = "Vec<CoreRange>")
)]
pub struct CoreRangeSet {
    ranges: BTreeSet<CoreRange>,
}

impl CoreRangeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        CoreRangeSet {
            ranges: BTreeSet::new(),
        }
    }

    /// Builds a set from coordinates or ranges.
    ///
    /// Duplicates and ranges lying inside another supplied range are dropped. Adjacent
    /// ranges are kept as given; only partially overlapping input is fused, so that the
    /// resulting ranges are always disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corerange::{CoreCoord, CoreRange, CoreRangeSet};
    ///
    /// let outer = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(5, 4)).unwrap();
    /// let inner = CoreRange::new(CoreCoord::new(1, 1), CoreCoord::new(2, 2)).unwrap();
    /// let set = CoreRangeSet::from_ranges([inner, outer, inner]);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CoreRange>,
    {
        let kept = merge::absorb(ranges.into_iter().map(Into::into));
        if merge::any_overlap(&kept) {
            log::trace!("fusing {} overlapping ranges at construction", kept.len());
            return CoreRangeSet {
                ranges: merge::fuse(kept),
            };
        }
        CoreRangeSet {
            ranges: kept.into_iter().collect(),
        }
    }

    /// The member ranges in ascending order.
    #[must_use]
    pub fn ranges(&self) -> &BTreeSet<CoreRange> {
        &self.ranges
    }

    /// Iterates over the member ranges in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, CoreRange> {
        self.ranges.iter()
    }

    /// Number of member ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the set covers no cores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of cores covered.
    ///
    /// Saturates at `u64::MAX`, which only a set spanning the whole `u32` plane can
    /// reach.
    #[must_use]
    pub fn num_cores(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.area()))
    }

    /// Smallest range enclosing every core of the set.
    #[must_use]
    pub fn bounding_box(&self) -> Option<CoreRange> {
        let first = self.ranges.first()?;
        let (mut x0, mut y0) = (first.start().x, first.start().y);
        let (mut x1, mut y1) = (first.end().x, first.end().y);
        for r in &self.ranges {
            x0 = x0.min(r.start().x);
            y0 = y0.min(r.start().y);
            x1 = x1.max(r.end().x);
            y1 = y1.max(r.end().y);
        }
        Some(CoreRange::from_bounds(x0, y0, x1, y1))
    }

    /// Returns `true` if `coord` is covered.
    #[must_use]
    pub fn contains(&self, coord: CoreCoord) -> bool {
        self.ranges.iter().any(|r| r.contains(coord))
    }

    /// Returns `true` if every core of `range` is covered, possibly by several members.
    #[must_use]
    pub fn contains_range(&self, range: &CoreRange) -> bool {
        merge::difference(std::iter::once(range), &self.ranges).is_empty()
    }

    /// Returns `true` if any core of `range` is covered.
    #[must_use]
    pub fn intersects(&self, range: &CoreRange) -> bool {
        self.ranges.iter().any(|r| r.intersects(range))
    }

    /// Returns `true` if both sets cover exactly the same cores, however they are
    /// split into ranges.
    #[must_use]
    pub fn same_coverage(&self, other: &CoreRangeSet) -> bool {
        self.iter().all(|r| other.contains_range(r)) && other.iter().all(|r| self.contains_range(r))
    }

    /// Returns a new set covering the cores of this set and of every addition.
    ///
    /// Additions may be coordinates, ranges, or the ranges of another set. The result
    /// is disjoint and fused into as few rectangles as the row-band heuristic finds;
    /// it is not guaranteed to be the minimum number. The layout depends only on the
    /// covered cores, so `a.merge(&b) == b.merge(&a)` even when `a` came unfused out of
    /// [`from_ranges`](Self::from_ranges). Merging a fused set with cores it already
    /// covers returns an equal set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corerange::{CoreCoord, CoreRange, CoreRangeSet};
    ///
    /// let top = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(4, 2)).unwrap();
    /// let stem = CoreRange::new(CoreCoord::new(2, 0), CoreCoord::new(3, 5)).unwrap();
    /// let set = CoreRangeSet::new().merge([top, stem]);
    ///
    /// let lower_stem = CoreRange::new(CoreCoord::new(2, 3), CoreCoord::new(3, 5)).unwrap();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![top, lower_stem]);
    ///
    /// // Merging a set with itself changes nothing.
    /// assert_eq!(set.merge(&set), set);
    /// ```
    #[must_use]
    pub fn merge<I>(&self, additions: I) -> CoreRangeSet
    where
        I: IntoIterator,
        I::Item: Into<CoreRange>,
    {
        let additions = additions.into_iter().map(Into::into);
        CoreRangeSet {
            ranges: merge::fuse(self.ranges.iter().copied().chain(additions)),
        }
    }

    /// Returns the cores covered by both sets.
    #[must_use]
    pub fn intersection(&self, other: &CoreRangeSet) -> CoreRangeSet {
        let shared: Vec<CoreRange> = self
            .ranges
            .iter()
            .flat_map(|a| other.ranges.iter().filter_map(move |b| a.intersection(b)))
            .collect();
        CoreRangeSet {
            ranges: merge::fuse(shared),
        }
    }

    /// Returns the cores of this set not covered by `other`.
    #[must_use]
    pub fn subtract(&self, other: &CoreRangeSet) -> CoreRangeSet {
        CoreRangeSet {
            ranges: merge::fuse(merge::difference(&self.ranges, &other.ranges)),
        }
    }

    /// Iterates over every covered core, range by range, each range walked in `order`.
    pub fn cores(&self, order: CoreOrder) -> impl Iterator<Item = CoreCoord> + '_ {
        self.ranges.iter().flat_map(move |r| r.cores(order))
    }

    /// One dispatch record per member range, in range order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<RangeDescriptor> {
        self.ranges.iter().copied().map(RangeDescriptor::from).collect()
    }
}

impl From<CoreCoord> for CoreRangeSet {
    fn from(coord: CoreCoord) -> Self {
        CoreRangeSet::from(CoreRange::from(coord))
    }
}

impl From<CoreRange> for CoreRangeSet {
    fn from(range: CoreRange) -> Self {
        CoreRangeSet {
            ranges: BTreeSet::from([range]),
        }
    }
}

impl From<Vec<CoreRange>> for CoreRangeSet {
    fn from(ranges: Vec<CoreRange>) -> Self {
        CoreRangeSet::from_ranges(ranges)
    }
}

impl From<CoreRangeSet> for Vec<CoreRange> {
    fn from(set: CoreRangeSet) -> Self {
        set.ranges.into_iter().collect()
    }
}

impl<R: Into<CoreRange>> FromIterator<R> for CoreRangeSet {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        CoreRangeSet::from_ranges(iter)
    }
}

impl<'a> IntoIterator for &'a CoreRangeSet {
    type Item = &'a CoreRange;
    type IntoIter = btree_set::Iter<'a, CoreRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl IntoIterator for CoreRangeSet {
    type Item = CoreRange;
    type IntoIter = btree_set::IntoIter<CoreRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl fmt::Display for CoreRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{range}")?;
        }
        write!(f, "}}")
    }
}
