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


//! Device grid extents and allocation of the first cores of a grid.

use crate::coord::{CoreCoord, CoreOrder};
use crate::range::CoreRange;
use crate::rangeset::CoreRangeSet;
use crate::result::{CoreRangeError, CoreRangeResult};

/// The extent of a compute grid: `x` columns by `y` rows, anchored at the origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreGrid {
    /// Number of columns.
    pub x: u32,
    /// Number of rows.
    pub y: u32,
}

impl CoreGrid {
    /// Creates a grid of `x` columns and `y` rows.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        CoreGrid { x, y }
    }

    /// Number of cores in the grid.
    #[must_use]
    pub fn num_cores(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y)
    }

    /// Returns `true` if `coord` falls inside the grid.
    #[must_use]
    pub fn contains(&self, coord: CoreCoord) -> bool {
        coord.x < self.x && coord.y < self.y
    }

    /// The range covering the whole grid, or `None` if the grid has no cores.
    #[must_use]
    pub fn full_range(&self) -> Option<CoreRange> {
        if self.x == 0 || self.y == 0 {
            return None;
        }
        Some(CoreRange::from_bounds(0, 0, self.x - 1, self.y - 1))
    }

    /// Selects the first `count` cores of the grid, walking it in `order`.
    ///
    /// The selection is returned as at most two ranges: the completely filled rows
    /// (or columns) and the partially filled one after them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreRangeError::InsufficientCores`] if `count` exceeds the grid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corerange::{CoreCoord, CoreGrid, CoreOrder, CoreRange};
    ///
    /// let grid = CoreGrid::new(8, 8);
    /// let set = grid.cores_to_range_set(19, CoreOrder::RowMajor).unwrap();
    /// let ranges: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(ranges, vec![
    ///     CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(7, 1)).unwrap(),
    ///     CoreRange::new(CoreCoord::new(0, 2), CoreCoord::new(2, 2)).unwrap(),
    /// ]);
    /// assert!(grid.cores_to_range_set(65, CoreOrder::RowMajor).is_err());
    /// ```
    pub fn cores_to_range_set(&self, count: u64, order: CoreOrder) -> CoreRangeResult<CoreRangeSet> {
        let available = self.num_cores();
        if count > available {
            return Err(CoreRangeError::InsufficientCores {
                requested: count,
                available,
            });
        }
        if count == 0 {
            return Ok(CoreRangeSet::new());
        }

        // Non-zero count within the grid means both extents are non-zero.
        let line_len = match order {
            CoreOrder::RowMajor => self.x,
            CoreOrder::ColumnMajor => self.y,
        };
        let full_lines = count / u64::from(line_len);
        let remainder = count % u64::from(line_len);
        // Both are bounded by the grid extents, which are u32.
        let full_lines = u32::try_from(full_lines).unwrap_or(u32::MAX);
        let remainder = u32::try_from(remainder).unwrap_or(u32::MAX);

        let mut ranges = Vec::with_capacity(2);
        match order {
            CoreOrder::RowMajor => {
                if full_lines > 0 {
                    ranges.push(CoreRange::from_bounds(0, 0, self.x - 1, full_lines - 1));
                }
                if remainder > 0 {
                    ranges.push(CoreRange::from_bounds(0, full_lines, remainder - 1, full_lines));
                }
            }
            CoreOrder::ColumnMajor => {
                if full_lines > 0 {
                    ranges.push(CoreRange::from_bounds(0, 0, full_lines - 1, self.y - 1));
                }
                if remainder > 0 {
                    ranges.push(CoreRange::from_bounds(full_lines, 0, full_lines, remainder - 1));
                }
            }
        }
        log::trace!("first {count} cores of {}x{} grid: {ranges:?}", self.x, self.y);
        Ok(CoreRangeSet::from_ranges(ranges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::range;

    #[test]
    fn test_full_range() {
        assert_eq!(CoreGrid::new(8, 10).full_range(), Some(range(0, 0, 7, 9)));
        assert_eq!(CoreGrid::new(0, 10).full_range(), None);
        assert_eq!(CoreGrid::new(8, 10).num_cores(), 80);
    }

    #[test]
    fn test_contains() {
        let grid = CoreGrid::new(4, 2);
        assert!(grid.contains(CoreCoord::new(3, 1)));
        assert!(!grid.contains(CoreCoord::new(4, 1)));
        assert!(!grid.contains(CoreCoord::new(0, 2)));
    }

    #[test]
    fn test_row_major_selection() {
        let grid = CoreGrid::new(5, 4);
        let set = grid.cores_to_range_set(12, CoreOrder::RowMajor).unwrap();
        let ranges: Vec<CoreRange> = set.iter().copied().collect();
        assert_eq!(ranges, vec![range(0, 0, 4, 1), range(0, 2, 1, 2)]);
        assert_eq!(set.num_cores(), 12);
    }

    #[test]
    fn test_column_major_selection() {
        let grid = CoreGrid::new(5, 4);
        let set = grid.cores_to_range_set(10, CoreOrder::ColumnMajor).unwrap();
        let ranges: Vec<CoreRange> = set.iter().copied().collect();
        assert_eq!(ranges, vec![range(0, 0, 1, 3), range(2, 0, 2, 1)]);
    }

    #[test]
    fn test_exact_lines_and_partial_line() {
        let grid = CoreGrid::new(5, 4);
        let rows = grid.cores_to_range_set(10, CoreOrder::RowMajor).unwrap();
        assert_eq!(rows.iter().copied().collect::<Vec<_>>(), vec![range(0, 0, 4, 1)]);
        let partial = grid.cores_to_range_set(3, CoreOrder::RowMajor).unwrap();
        assert_eq!(partial.iter().copied().collect::<Vec<_>>(), vec![range(0, 0, 2, 0)]);
        let whole = grid.cores_to_range_set(20, CoreOrder::ColumnMajor).unwrap();
        assert_eq!(whole.iter().copied().collect::<Vec<_>>(), vec![range(0, 0, 4, 3)]);
    }

    #[test]
    fn test_zero_and_too_many() {
        let grid = CoreGrid::new(2, 2);
        assert!(grid.cores_to_range_set(0, CoreOrder::RowMajor).unwrap().is_empty());
        assert_eq!(
            grid.cores_to_range_set(5, CoreOrder::RowMajor),
            Err(CoreRangeError::InsufficientCores {
                requested: 5,
                available: 4,
            })
        );
        assert!(CoreGrid::new(0, 0).cores_to_range_set(1, CoreOrder::ColumnMajor).is_err());
    }
}
