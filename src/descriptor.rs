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


//! Fixed-size dispatch records for core ranges.

use crate::coord::CoreCoord;
use crate::range::CoreRange;
use crate::result::{CoreRangeError, CoreRangeResult};

/// A four-word record describing one [`CoreRange`].
///
/// Dispatch code writes one record per range of a
/// [`CoreRangeSet`](crate::CoreRangeSet), laid out as `start_x, start_y, end_x, end_y`.
///
/// # Examples
///
/// ```rust
/// use corerange::{CoreCoord, CoreRange, RangeDescriptor};
///
/// let range = CoreRange::new(CoreCoord::new(1, 2), CoreCoord::new(3, 4)).unwrap();
/// let record = RangeDescriptor::from(range);
/// assert_eq!(record.to_words(), [1, 2, 3, 4]);
/// assert_eq!(CoreRange::try_from(record).unwrap(), range);
/// ```
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDescriptor {
    /// Column of the top-left corner.
    pub start_x: u32,
    /// Row of the top-left corner.
    pub start_y: u32,
    /// Column of the bottom-right corner.
    pub end_x: u32,
    /// Row of the bottom-right corner.
    pub end_y: u32,
}

impl RangeDescriptor {
    /// Returns the record as `[start_x, start_y, end_x, end_y]`.
    #[must_use]
    pub const fn to_words(&self) -> [u32; 4] {
        [self.start_x, self.start_y, self.end_x, self.end_y]
    }

    /// Reads a record laid out as `[start_x, start_y, end_x, end_y]`.
    #[must_use]
    pub const fn from_words([start_x, start_y, end_x, end_y]: [u32; 4]) -> Self {
        RangeDescriptor {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }
}

impl From<CoreRange> for RangeDescriptor {
    fn from(range: CoreRange) -> Self {
        RangeDescriptor {
            start_x: range.start().x,
            start_y: range.start().y,
            end_x: range.end().x,
            end_y: range.end().y,
        }
    }
}

impl TryFrom<RangeDescriptor> for CoreRange {
    type Error = CoreRangeError;

    fn try_from(record: RangeDescriptor) -> CoreRangeResult<Self> {
        CoreRange::new(
            CoreCoord::new(record.start_x, record.start_y),
            CoreCoord::new(record.end_x, record.end_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_layout() {
        let record = RangeDescriptor::from_words([0, 1, 7, 11]);
        assert_eq!(record.start_x, 0);
        assert_eq!(record.start_y, 1);
        assert_eq!(record.end_x, 7);
        assert_eq!(record.end_y, 11);
        assert_eq!(record.to_words(), [0, 1, 7, 11]);
        assert_eq!(std::mem::size_of::<RangeDescriptor>(), 16);
    }

    #[test]
    fn test_reversed_record_rejected() {
        let record = RangeDescriptor::from_words([4, 0, 2, 0]);
        assert!(matches!(
            CoreRange::try_from(record),
            Err(CoreRangeError::InvalidRange { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_range_validates() {
        let range: CoreRange =
            serde_json::from_str(r#"{"start_x":0,"start_y":0,"end_x":4,"end_y":2}"#).unwrap();
        assert_eq!(range.end(), CoreCoord::new(4, 2));
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"start_x":0,"start_y":0,"end_x":4,"end_y":2}"#
        );
        assert!(
            serde_json::from_str::<CoreRange>(r#"{"start_x":5,"start_y":0,"end_x":4,"end_y":2}"#)
                .is_err()
        );
    }
}
