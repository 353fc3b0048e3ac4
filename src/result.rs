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


//! Error types and results for the CoreRange library.

use crate::coord::CoreCoord;
use thiserror::Error;

/// A specialized Result type for CoreRange operations.
pub type CoreRangeResult<T> = Result<T, CoreRangeError>;

/// Errors that can occur while building core ranges.
///
/// Only construction is fallible. Once a [`CoreRange`](crate::CoreRange) or
/// [`CoreRangeSet`](crate::CoreRangeSet) exists every query and merge on it is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreRangeError {
    /// The start corner lies right of or below the end corner.
    #[error("invalid core range: start {start} must not exceed end {end} on either axis")]
    InvalidRange {
        /// Requested start corner.
        start: CoreCoord,
        /// Requested end corner.
        end: CoreCoord,
    },
    /// More cores were requested than the grid holds.
    #[error("requested {requested} cores but the grid only has {available}")]
    InsufficientCores {
        /// Number of cores asked for.
        requested: u64,
        /// Number of cores in the grid.
        available: u64,
    },
}
