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


//! # CoreRange
//!
//! A Rust library describing which cores of a 2-D compute mesh are assigned to a workload.
//! A workload is given as individual cores and rectangular core blocks; the library
//! turns that into a canonical set of disjoint rectangles covering exactly the requested
//! cores, ready to be written out as per-range dispatch records.
//!
//! ## Key Features
//!
//! - **Validated Value Types**: `CoreCoord` and `CoreRange` are immutable; reversed
//!   corners are rejected at construction instead of being silently swapped
//! - **Exact Coverage**: merging never gains or loses a core and never produces
//!   overlapping ranges
//! - **Compact Output**: touching and overlapping blocks are fused row band by row band
//! - **Deterministic**: identical coverage always produces identical ranges, in the
//!   same order, whatever order the input arrived in
//! - **Set Algebra**: intersection, subtraction, containment and coverage comparison
//! - **Dispatch Records**: four-word `RangeDescriptor` per range
//!
//! ## Usage Examples
//!
//! ### Merging Cores Into Ranges
//!
//! ```rust
//! use corerange::{CoreCoord, CoreRange, CoreRangeSet};
//!
//! // Fifteen single cores forming a 5x3 block.
//! let cores = (0..3).flat_map(|y| (0..5).map(move |x| CoreCoord::new(x, y)));
//! let set = CoreRangeSet::new().merge(cores);
//!
//! let block = CoreRange::new(CoreCoord::new(0, 0), CoreCoord::new(4, 2)).unwrap();
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![block]);
//! ```
//!
//! ### Writing Dispatch Records
//!
//! ```rust
//! use corerange::{CoreGrid, CoreOrder};
//!
//! let grid = CoreGrid::new(8, 8);
//! let set = grid.cores_to_range_set(20, CoreOrder::RowMajor).unwrap();
//! let words: Vec<[u32; 4]> = set.descriptors().iter().map(|d| d.to_words()).collect();
//! assert_eq!(words, vec![[0, 0, 7, 1], [0, 2, 3, 2]]);
//! ```
//!
//! ## Merge Heuristic
//!
//! Merging is greedy: coverage is cut into row bands, each band's column spans are
//! coalesced, and equal spans of consecutive bands are stacked. The result is always a
//! valid disjoint cover but not always the smallest one. Three bars forming an "H"
//! come back as five ranges:
//!
//! ```rust
//! use corerange::{CoreCoord, CoreRange, CoreRangeSet};
//!
//! let r = |x0, y0, x1, y1| CoreRange::new(CoreCoord::new(x0, y0), CoreCoord::new(x1, y1)).unwrap();
//! let h = CoreRangeSet::new().merge([r(0, 0, 1, 5), r(3, 0, 4, 5), r(0, 2, 4, 3)]);
//! assert_eq!(h.len(), 5);
//! assert_eq!(h.num_cores(), 26);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `CoreRangeResult<T>` which can contain the following errors:
//!
//! - `CoreRangeError::InvalidRange`: a range was built with its start past its end
//! - `CoreRangeError::InsufficientCores`: more cores were requested than a grid holds
//!
//! Merging, containment and the set operations cannot fail.
//!
//! ## Logging
//!
//! The merge engine reports through the `log` facade: one `debug` line per merge,
//! intersection or subtraction, and `trace` lines for every row band and pass. No logger is
//! installed by the library.
//!
//! ## Thread Safety
//!
//! All types are plain values and implement `Send` and `Sync`. Operations never mutate
//! their inputs, so independent workloads can be built concurrently.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all public value types. Ranges are validated
//!   and sets are normalized when deserialized.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod coord;
mod descriptor;
mod grid;
mod merge;
mod range;
mod rangeset;
mod result;
#[cfg(test)]
mod testing;

pub use self::coord::{CoreCoord, CoreOrder};
pub use self::descriptor::RangeDescriptor;
pub use self::grid::CoreGrid;
pub use self::range::{CoreRange, CoreRangeIter};
pub use self::rangeset::CoreRangeSet;
pub use self::result::{CoreRangeError, CoreRangeResult};
