// Dweve ELOBench - Benchmark analysis for the Efficient Limit Order Book
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reference record sets.

use elobench_core::{BenchmarkRecord, RecordStore};

/// Scenarios written by the bench runner, in its emission order.
pub const RUNNER_SCENARIOS: [&str; 3] = ["same_price", "spread", "crossing"];

/// Order counts the bench runner sweeps.
pub const RUNNER_SIZES: [u64; 3] = [1000, 10_000, 50_000];

/// The three-row dataset used by the end-to-end checks.
///
/// `fast` runs at two sizes with identical throughput; `slow` runs once.
pub fn e2e_records() -> Vec<BenchmarkRecord> {
    vec![
        BenchmarkRecord::new("fast", 1000, 0.01, 100_000.0, 50, 100),
        BenchmarkRecord::new("fast", 50_000, 0.5, 100_000.0, 2500, 5000),
        BenchmarkRecord::new("slow", 1000, 0.02, 50_000.0, 10, 100),
    ]
}

/// [`e2e_records`] as a store.
pub fn e2e_store() -> RecordStore {
    RecordStore::new(e2e_records())
}

/// A realistic bench runner output: three scenarios at three sizes,
/// interleaved by size as the runner writes them.
pub fn bench_runner_records() -> Vec<BenchmarkRecord> {
    vec![
        BenchmarkRecord::new("same_price", 1000, 0.000412, 2_427_184.0, 500, 1000),
        BenchmarkRecord::new("spread", 1000, 0.000538, 1_858_736.0, 312, 1000),
        BenchmarkRecord::new("crossing", 1000, 0.000655, 1_526_717.0, 498, 1000),
        BenchmarkRecord::new("same_price", 10_000, 0.003921, 2_550_370.0, 5000, 10_000),
        BenchmarkRecord::new("spread", 10_000, 0.006102, 1_638_807.0, 3377, 10_000),
        BenchmarkRecord::new("crossing", 10_000, 0.007480, 1_336_898.0, 4998, 10_000),
        BenchmarkRecord::new("same_price", 50_000, 0.019870, 2_516_356.0, 25_000, 50_000),
        BenchmarkRecord::new("spread", 50_000, 0.036250, 1_379_310.0, 17_012, 50_000),
        BenchmarkRecord::new("crossing", 50_000, 0.041320, 1_210_068.0, 24_998, 50_000),
    ]
}

/// [`bench_runner_records`] as a store.
pub fn bench_runner_store() -> RecordStore {
    RecordStore::new(bench_runner_records())
}

/// Deterministic synthetic records: every scenario at every size.
///
/// Throughput decays with size so that scaling factors fall below 1.
pub fn synthetic_records(scenarios: usize, sizes: &[u64]) -> Vec<BenchmarkRecord> {
    let mut records = Vec::with_capacity(scenarios * sizes.len());

    for &n in sizes {
        for s in 0..scenarios {
            let base = 1_000_000.0 + (s as f64) * 25_000.0;
            let throughput = base / (1.0 + (n as f64).log10() / 10.0);
            let seconds = n as f64 / throughput;
            let trades = n / (2 + (s as u64 % 3));
            records.push(BenchmarkRecord::new(
                format!("scenario_{s:03}"),
                n,
                seconds,
                throughput,
                trades,
                n,
            ));
        }
    }

    records
}
