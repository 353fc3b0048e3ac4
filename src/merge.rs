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


//! Row-band merge engine behind [`CoreRangeSet`](crate::CoreRangeSet).
//!
//! Merging runs in three steps:
//!
//! 1. **Absorption** drops duplicate ranges and ranges wholly inside another one.
//! 2. **Horizontal pass** cuts the plane into row bands at every range's top edge and
//!    one past every bottom edge. Coverage is constant inside a band, so each band is
//!    described by its consolidated column spans: overlapping or touching spans are
//!    coalesced into the fewest intervals.
//! 3. **Vertical pass** walks the bands top to bottom and stacks a span onto the
//!    rectangle directly above it when both cover exactly the same columns.
//!
//! Steps 2 and 3 repeat until a pass leaves the rectangles unchanged.
//!
//! The result is a greedy cover, not a minimum one. An "H" made of two posts and a
//! crossbar comes out as five rectangles because the posts are split wherever the
//! crossbar widens their rows. Spans are produced in ascending column order and bands
//! in ascending row order, so identical coverage always yields identical rectangles,
//! whatever order the input arrived in.

use crate::coord::CoreCoord;
use crate::range::CoreRange;
use std::collections::{BTreeMap, BTreeSet};
use std::iter::FusedIterator;

/// Inclusive column interval `(first, last)`.
type Span = (u32, u32);

/// Rows `top..=bottom` sharing the same column coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Band {
    top: u32,
    bottom: u32,
    spans: Vec<Span>,
}

/// Removes duplicates and ranges covered by a single other range.
///
/// The survivors are returned in ascending range order.
pub(crate) fn absorb<I>(ranges: I) -> Vec<CoreRange>
where
    I: IntoIterator<Item = CoreRange>,
{
    let unique: BTreeSet<CoreRange> = ranges.into_iter().collect();
    let mut by_area: Vec<CoreRange> = unique.into_iter().collect();
    // Larger ranges first so a container is always kept before what it absorbs.
    by_area.sort_by(|a, b| b.area().cmp(&a.area()).then(a.cmp(b)));

    let mut kept: Vec<CoreRange> = Vec::with_capacity(by_area.len());
    for range in by_area {
        if !kept.iter().any(|k| k.contains_range(&range)) {
            kept.push(range);
        }
    }
    kept.sort_unstable();
    kept
}

/// Returns `true` if any two of the given ranges share a core.
pub(crate) fn any_overlap(ranges: &[CoreRange]) -> bool {
    ranges
        .iter()
        .enumerate()
        .any(|(i, a)| ranges[i + 1..].iter().any(|b| a.intersects(b)))
}

/// Fuses arbitrary, possibly overlapping ranges into disjoint rectangles covering
/// exactly the same cores.
pub(crate) fn fuse<I>(ranges: I) -> BTreeSet<CoreRange>
where
    I: IntoIterator<Item = CoreRange>,
{
    let input = absorb(ranges);
    let input_len = input.len();
    let mut current: BTreeSet<CoreRange> = input.into_iter().collect();

    let mut passes = 0usize;
    loop {
        passes += 1;
        let next = vertical_pass(horizontal_pass(&current));
        log::trace!("fusion pass {passes}: {} -> {} ranges", current.len(), next.len());
        if next == current {
            break;
        }
        current = next;
    }

    log::debug!(
        "fused {input_len} ranges into {} after {passes} passes",
        current.len()
    );
    current
}

/// Splits the covered rows into bands of uniform coverage.
fn horizontal_pass(ranges: &BTreeSet<CoreRange>) -> Vec<Band> {
    let mut cuts = BTreeSet::new();
    for range in ranges {
        cuts.insert(range.start().y);
        if let Some(after) = range.end().y.checked_add(1) {
            cuts.insert(after);
        }
    }
    let cuts: Vec<u32> = cuts.into_iter().collect();

    let mut bands = Vec::with_capacity(cuts.len());
    for (i, &top) in cuts.iter().enumerate() {
        // The last band only has coverage when some range runs to the final row.
        let bottom = cuts.get(i + 1).map_or(u32::MAX, |next| next - 1);
        let covering: Vec<Span> = ranges
            .iter()
            .filter(|r| r.start().y <= top && top <= r.end().y)
            .map(|r| (r.start().x, r.end().x))
            .collect();
        if covering.is_empty() {
            continue;
        }
        let spans: Vec<Span> = SpanConsolidation::new(covering).collect();
        log::trace!("rows {top}..={bottom}: spans {spans:?}");
        bands.push(Band { top, bottom, spans });
    }
    bands
}

/// Stacks equal spans of consecutive bands into taller rectangles.
fn vertical_pass(bands: Vec<Band>) -> BTreeSet<CoreRange> {
    let mut fused = BTreeSet::new();
    // Rectangles ending on the last processed row, keyed by their columns.
    let mut open: BTreeMap<Span, CoreRange> = BTreeMap::new();
    let mut last_bottom: Option<u32> = None;

    for band in bands {
        if last_bottom.and_then(|b| b.checked_add(1)) != Some(band.top) {
            fused.extend(std::mem::take(&mut open).into_values());
        }

        let mut next_open = BTreeMap::new();
        for (x0, x1) in band.spans {
            let grown = match open.remove(&(x0, x1)) {
                Some(above) => CoreRange::new_unchecked(above.start(), CoreCoord::new(x1, band.bottom)),
                None => CoreRange::from_bounds(x0, band.top, x1, band.bottom),
            };
            next_open.insert((x0, x1), grown);
        }
        fused.extend(std::mem::replace(&mut open, next_open).into_values());
        last_bottom = Some(band.bottom);
    }

    fused.extend(open.into_values());
    fused
}

/// Iterates over consolidated column spans in ascending order.
///
/// Spans that overlap or sit directly next to each other are joined.
struct SpanConsolidation {
    reverse_sorted_spans: Vec<Span>,
}

impl SpanConsolidation {
    fn new(spans: Vec<Span>) -> Self {
        let mut reverse_sorted_spans = spans;
        reverse_sorted_spans.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        Self {
            reverse_sorted_spans,
        }
    }
}

impl Iterator for SpanConsolidation {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let mut curr = self.reverse_sorted_spans.pop()?;
        while let Some(&(start, end)) = self.reverse_sorted_spans.last() {
            if start > curr.1.saturating_add(1) {
                break;
            }
            self.reverse_sorted_spans.pop();
            curr.1 = curr.1.max(end);
        }
        Some(curr)
    }
}

impl FusedIterator for SpanConsolidation {}

/// Returns the parts of `from` not covered by `cut`, as at most four disjoint ranges.
pub(crate) fn subtract_range(from: &CoreRange, cut: &CoreRange) -> Vec<CoreRange> {
    let Some(hole) = from.intersection(cut) else {
        return vec![*from];
    };
    let (s, e) = (from.start(), from.end());
    let (hs, he) = (hole.start(), hole.end());

    let mut pieces = Vec::with_capacity(4);
    if hs.y > s.y {
        pieces.push(CoreRange::from_bounds(s.x, s.y, e.x, hs.y - 1));
    }
    if hs.x > s.x {
        pieces.push(CoreRange::from_bounds(s.x, hs.y, hs.x - 1, he.y));
    }
    if he.x < e.x {
        pieces.push(CoreRange::from_bounds(he.x + 1, hs.y, e.x, he.y));
    }
    if he.y < e.y {
        pieces.push(CoreRange::from_bounds(s.x, he.y + 1, e.x, e.y));
    }
    pieces
}

/// Returns disjoint ranges covering the cores of `ranges` outside every range of `cuts`.
pub(crate) fn difference<'a, I, J>(ranges: I, cuts: J) -> Vec<CoreRange>
where
    I: IntoIterator<Item = &'a CoreRange>,
    J: IntoIterator<Item = &'a CoreRange>,
{
    let mut remaining: Vec<CoreRange> = ranges.into_iter().copied().collect();
    for cut in cuts {
        if remaining.is_empty() {
            break;
        }
        remaining = remaining
            .iter()
            .flat_map(|r| subtract_range(r, cut))
            .collect();
    }
    remaining
}
