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


//! Physical core coordinates on a 2-D mesh.

use std::cmp::Ordering;
use std::fmt;

/// A single core position on the mesh.
///
/// Coordinates order row-major: first by `y`, then by `x`. This is the order
/// used for every deterministic iteration in the crate.
///
/// # Examples
///
/// ```rust
/// use corerange::CoreCoord;
///
/// let a = CoreCoord::new(5, 0);
/// let b = CoreCoord::new(0, 1);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(x=5,y=0)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreCoord {
    /// Column of the core.
    pub x: u32,
    /// Row of the core.
    pub y: u32,
}

impl CoreCoord {
    /// Creates a coordinate at column `x`, row `y`.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        CoreCoord { x, y }
    }
}

impl Ord for CoreCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for CoreCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32)> for CoreCoord {
    fn from((x, y): (u32, u32)) -> Self {
        CoreCoord::new(x, y)
    }
}

impl fmt::Display for CoreCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={},y={})", self.x, self.y)
    }
}

/// Traversal order used when enumerating the cores of a range or grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreOrder {
    /// Walk each row left to right, rows top to bottom.
    #[default]
    RowMajor,
    /// Walk each column top to bottom, columns left to right.
    ColumnMajor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_row_major_order() {
        assert!(CoreCoord::new(9, 0) < CoreCoord::new(0, 1));
        assert!(CoreCoord::new(1, 3) < CoreCoord::new(2, 3));
        assert_eq!(CoreCoord::new(2, 2).cmp(&CoreCoord::new(2, 2)), Ordering::Equal);
    }

    #[test]
    fn test_set_iteration_is_row_major() {
        let coords: BTreeSet<CoreCoord> = [(1, 1), (0, 1), (3, 0), (0, 0)]
            .into_iter()
            .map(CoreCoord::from)
            .collect();
        let ordered: Vec<(u32, u32)> = coords.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(ordered, vec![(0, 0), (3, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CoreCoord::new(7, 12).to_string(), "(x=7,y=12)");
    }
}
