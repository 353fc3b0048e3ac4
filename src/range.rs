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


//! Inclusive rectangular blocks of cores.

use crate::coord::{CoreCoord, CoreOrder};
use crate::result::{CoreRangeError, CoreRangeResult};
use std::fmt;
use std::iter::FusedIterator;

/// An axis-aligned rectangle of cores, inclusive of both corners.
///
/// A `CoreRange` always satisfies `start.x <= end.x` and `start.y <= end.y`. A single
/// core is the degenerate range whose corners are equal. Ranges order
/// lexicographically by `(start, end)` using the row-major [`CoreCoord`] order, which
/// makes them usable as keys of ordered collections.
///
/// # Examples
///
/// ```rust
/// use corerange::{CoreCoord, CoreRange};
///
/// let range = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(4, 2)).unwrap();
/// assert_eq!(range.area(), 15);
/// assert!(range.contains(CoreCoord::new(4, 2)));
/// assert!(!range.contains(CoreCoord::new(5, 2)));
///
/// // Reversed corners are rejected, never swapped.
/// assert!(CoreRange::new(CoreCoord::new(4, 2), CoreCoord::new(0, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::descriptor::RangeDescriptor",
        into = "crate::descriptor::RangeDescriptor"
    )
)]
pub struct CoreRange {
    start: CoreCoord,
    end: CoreCoord,
}

impl CoreRange {
    /// Creates a range spanning `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CoreRangeError::InvalidRange`] if `start.x > end.x` or `start.y > end.y`.
    pub fn new(start: CoreCoord, end: CoreCoord) -> CoreRangeResult<Self> {
        if start.x > end.x || start.y > end.y {
            return Err(CoreRangeError::InvalidRange { start, end });
        }
        Ok(CoreRange { start, end })
    }

    /// Builds a range from corners the caller has already ordered.
    pub(crate) fn new_unchecked(start: CoreCoord, end: CoreCoord) -> Self {
        debug_assert!(start.x <= end.x && start.y <= end.y);
        CoreRange { start, end }
    }

    /// Builds a range from raw inclusive bounds the caller has already ordered.
    pub(crate) fn from_bounds(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self::new_unchecked(CoreCoord::new(x0, y0), CoreCoord::new(x1, y1))
    }

    /// Top-left corner.
    #[must_use]
    pub const fn start(&self) -> CoreCoord {
        self.start
    }

    /// Bottom-right corner.
    #[must_use]
    pub const fn end(&self) -> CoreCoord {
        self.end
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> u64 {
        u64::from(self.end.x - self.start.x) + 1
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> u64 {
        u64::from(self.end.y - self.start.y) + 1
    }

    /// Number of cores covered.
    ///
    /// Saturates at `u64::MAX`: the full `u32` plane holds 2^64 cores, one more than
    /// fits.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Returns `true` if `coord` lies inside this range.
    #[must_use]
    pub fn contains(&self, coord: CoreCoord) -> bool {
        (self.start.x..=self.end.x).contains(&coord.x)
            && (self.start.y..=self.end.y).contains(&coord.y)
    }

    /// Returns `true` if every core of `other` lies inside this range.
    #[must_use]
    pub fn contains_range(&self, other: &CoreRange) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Returns `true` if the two ranges share at least one core.
    ///
    /// Corners are inclusive, so two ranges whose edges sit on the same row or
    /// column intersect along that edge.
    #[must_use]
    pub fn intersects(&self, other: &CoreRange) -> bool {
        self.start.x <= other.end.x
            && other.start.x <= self.end.x
            && self.start.y <= other.end.y
            && other.start.y <= self.end.y
    }

    /// Returns the cores shared by both ranges, if any.
    #[must_use]
    pub fn intersection(&self, other: &CoreRange) -> Option<CoreRange> {
        if !self.intersects(other) {
            return None;
        }
        Some(CoreRange::from_bounds(
            self.start.x.max(other.start.x),
            self.start.y.max(other.start.y),
            self.end.x.min(other.end.x),
            self.end.y.min(other.end.y),
        ))
    }

    /// Returns `true` if both ranges cover the same columns and sit directly above
    /// or below each other, so that together they form one taller rectangle.
    #[must_use]
    pub fn row_span_equal(&self, other: &CoreRange) -> bool {
        self.start.x == other.start.x
            && self.end.x == other.end.x
            && (self.end.y.checked_add(1) == Some(other.start.y)
                || other.end.y.checked_add(1) == Some(self.start.y))
    }

    /// Returns `true` if both ranges cover the same rows and sit directly left or
    /// right of each other, so that together they form one wider rectangle.
    #[must_use]
    pub fn col_span_equal(&self, other: &CoreRange) -> bool {
        self.start.y == other.start.y
            && self.end.y == other.end.y
            && (self.end.x.checked_add(1) == Some(other.start.x)
                || other.end.x.checked_add(1) == Some(self.start.x))
    }

    /// Iterates over every core of the range in the given order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corerange::{CoreCoord, CoreOrder, CoreRange};
    ///
    /// let range = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(1, 1)).unwrap();
    /// let cols: Vec<_> = range.cores(CoreOrder::ColumnMajor).map(|c| (c.x, c.y)).collect();
    /// assert_eq!(cols, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    #[must_use]
    pub fn cores(&self, order: CoreOrder) -> CoreRangeIter {
        CoreRangeIter {
            range: *self,
            order,
            next: Some(self.start),
        }
    }
}

impl From<CoreCoord> for CoreRange {
    fn from(coord: CoreCoord) -> Self {
        CoreRange::new_unchecked(coord, coord)
    }
}

impl From<&CoreCoord> for CoreRange {
    fn from(coord: &CoreCoord) -> Self {
        CoreRange::from(*coord)
    }
}

impl From<&CoreRange> for CoreRange {
    fn from(range: &CoreRange) -> Self {
        *range
    }
}

impl TryFrom<(CoreCoord, CoreCoord)> for CoreRange {
    type Error = CoreRangeError;

    fn try_from((start, end): (CoreCoord, CoreCoord)) -> CoreRangeResult<Self> {
        CoreRange::new(start, end)
    }
}

impl fmt::Display for CoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// Iterator over the cores of a [`CoreRange`], created by [`CoreRange::cores`].
#[derive(Debug, Clone)]
pub struct CoreRangeIter {
    range: CoreRange,
    order: CoreOrder,
    next: Option<CoreCoord>,
}

impl Iterator for CoreRangeIter {
    type Item = CoreCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let CoreRange { start, end } = self.range;
        self.next = match self.order {
            CoreOrder::RowMajor if current.x < end.x => Some(CoreCoord::new(current.x + 1, current.y)),
            CoreOrder::RowMajor if current.y < end.y => Some(CoreCoord::new(start.x, current.y + 1)),
            CoreOrder::ColumnMajor if current.y < end.y => Some(CoreCoord::new(current.x, current.y + 1)),
            CoreOrder::ColumnMajor if current.x < end.x => Some(CoreCoord::new(current.x + 1, start.y)),
            _ => None,
        };
        Some(current)
    }
}

impl FusedIterator for CoreRangeIter {}
