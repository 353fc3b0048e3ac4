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


//! Coverage checks and input generators shared by the unit tests.
//!
//! Tests compare what cores a result covers rather than how many rectangles it uses,
//! except where a literal layout is pinned on purpose.

use crate::coord::{CoreCoord, CoreOrder};
use crate::range::CoreRange;
use crate::rangeset::CoreRangeSet;
use std::collections::BTreeSet;

pub(crate) fn coord(x: u32, y: u32) -> CoreCoord {
    CoreCoord::new(x, y)
}

pub(crate) fn range(x0: u32, y0: u32, x1: u32, y1: u32) -> CoreRange {
    CoreRange::new(coord(x0, y0), coord(x1, y1)).unwrap()
}

/// Every core covered by `ranges`.
pub(crate) fn cells<'a, I>(ranges: I) -> BTreeSet<CoreCoord>
where
    I: IntoIterator<Item = &'a CoreRange>,
{
    ranges
        .into_iter()
        .flat_map(|r| r.cores(CoreOrder::RowMajor))
        .collect()
}

pub(crate) fn assert_disjoint(ranges: &[CoreRange]) {
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            assert!(!a.intersects(b), "{a} overlaps {b}");
        }
    }
}

pub(crate) fn assert_exact_cover(set: &CoreRangeSet, expected: &BTreeSet<CoreCoord>) {
    let ranges: Vec<CoreRange> = set.iter().copied().collect();
    assert_disjoint(&ranges);
    assert_eq!(&cells(&ranges), expected, "coverage mismatch for {set}");
}

/// Small deterministic generator so property checks are reproducible.
pub(crate) struct XorShift(u64);

impl XorShift {
    pub(crate) fn new(seed: u64) -> Self {
        XorShift(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// A value in `0..bound`.
    pub(crate) fn below(&mut self, bound: u32) -> u32 {
        u32::try_from(self.next_u64() % u64::from(bound)).unwrap()
    }

    /// A random range inside a `width` x `height` grid anchored at the origin.
    pub(crate) fn range_within(&mut self, width: u32, height: u32) -> CoreRange {
        let (xa, xb) = (self.below(width), self.below(width));
        let (ya, yb) = (self.below(height), self.below(height));
        range(xa.min(xb), ya.min(yb), xa.max(xb), ya.max(yb))
    }
}
