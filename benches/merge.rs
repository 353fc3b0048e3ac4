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


use criterion::{black_box, Criterion};
use corerange::{CoreCoord, CoreOrder, CoreRange, CoreRangeSet};

fn range(x0: u32, y0: u32, x1: u32, y1: u32) -> CoreRange {
    CoreRange::new(CoreCoord::new(x0, y0), CoreCoord::new(x1, y1)).unwrap()
}

pub fn bench_unit_cores(c: &mut Criterion) {
    let cores: Vec<CoreCoord> = range(0, 0, 11, 9).cores(CoreOrder::RowMajor).collect();
    c.bench_function("merge 120 unit cores into one block", |b| {
        b.iter(|| CoreRangeSet::new().merge(black_box(&cores)));
    });
}

pub fn bench_incremental_cores(c: &mut Criterion) {
    c.bench_function("merge 64 cores one at a time", |b| {
        b.iter(|| {
            let mut set = CoreRangeSet::new();
            for i in 0..64u32 {
                set = set.merge([black_box(CoreCoord::new(i % 8, i / 8))]);
            }
            set
        });
    });
}

pub fn bench_overlapping_bars(c: &mut Criterion) {
    let bars: Vec<CoreRange> = (0..16u32)
        .map(|i| {
            if i % 2 == 0 {
                range(i, 0, i + 1, 31)
            } else {
                range(0, i * 2, 31, i * 2 + 1)
            }
        })
        .collect();
    c.bench_function("merge 16 crossing bars", |b| {
        b.iter(|| CoreRangeSet::new().merge(black_box(&bars)));
    });
}

pub fn bench_sparse_cores(c: &mut Criterion) {
    let cores: Vec<CoreCoord> = (0..200u32)
        .map(|i| CoreCoord::new((i * 7) % 64, (i * 13) % 64))
        .collect();
    c.bench_function("merge 200 scattered cores", |b| {
        b.iter(|| CoreRangeSet::new().merge(black_box(&cores)));
    });
}
