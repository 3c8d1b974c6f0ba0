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

//! Shared test fixtures and utilities for ELOBench crates.
//!
//! # Quick Start
//!
//! ```rust
//! use elobench_test::fixtures;
//!
//! let store = fixtures::e2e_store();           // three-row reference dataset
//! let store = fixtures::bench_runner_store();  // 3 scenarios x 3 sizes
//!
//! use elobench_test::fixtures::builders::RecordBuilder;
//!
//! let record = RecordBuilder::new("spread").order_count(1000).build();
//!
//! // CSV text for loader and CLI tests
//! let csv = elobench_test::to_csv_text(fixtures::e2e_store().records());
//! assert!(csv.starts_with("scenario,N,"));
//! ```

pub mod fixtures;

use elobench_core::{BenchmarkRecord, Field};

/// Header line written by the bench runner.
pub const CSV_HEADER: &str = "scenario,N,seconds,throughput_ops_s,trades,orders";

/// Renders records as benchmark CSV text. Absent fields become empty cells.
pub fn to_csv_text(records: &[BenchmarkRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for record in records {
        let cells = Field::ALL.map(|field| match field {
            Field::Scenario => record.scenario.clone().unwrap_or_default(),
            Field::OrderCount => opt(record.order_count),
            Field::Seconds => opt(record.seconds),
            Field::Throughput => opt(record.throughput),
            Field::Trades => opt(record.trades),
            Field::Orders => opt(record.orders),
        });
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_csv_text() {
        let csv = to_csv_text(fixtures::e2e_store().records());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "fast,1000,0.01,100000,50,100");
    }

    #[test]
    fn test_to_csv_text_blank_cells() {
        let mut record = BenchmarkRecord::new("a", 1, 1.0, 1.0, 1, 1);
        record.trades = None;
        let csv = to_csv_text(&[record]);
        assert!(csv.ends_with("a,1,1,1,,1\n"));
    }
}
