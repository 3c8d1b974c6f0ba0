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

//! Builder for customized benchmark records.

use elobench_core::BenchmarkRecord;

/// Builds a [`BenchmarkRecord`] starting from sensible defaults.
///
/// # Examples
///
/// ```
/// use elobench_test::fixtures::builders::RecordBuilder;
///
/// let record = RecordBuilder::new("spread")
///     .order_count(50_000)
///     .throughput(80_000.0)
///     .without_orders()
///     .build();
///
/// assert_eq!(record.order_count, Some(50_000));
/// assert_eq!(record.orders, None);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: BenchmarkRecord,
}

impl RecordBuilder {
    /// Starts a record for `scenario` at N=1000, 10k ops/s, 50% trades.
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            record: BenchmarkRecord::new(scenario, 1000, 0.1, 10_000.0, 500, 1000),
        }
    }

    /// Sets the order count. Orders follow it.
    pub fn order_count(mut self, n: u64) -> Self {
        self.record.order_count = Some(n);
        self.record.orders = Some(n);
        self
    }

    /// Sets throughput; seconds follow from the order count.
    pub fn throughput(mut self, ops: f64) -> Self {
        self.record.throughput = Some(ops);
        if let (Some(n), true) = (self.record.order_count, ops > 0.0) {
            self.record.seconds = Some(n as f64 / ops);
        }
        self
    }

    pub fn seconds(mut self, seconds: f64) -> Self {
        self.record.seconds = Some(seconds);
        self
    }

    pub fn trades(mut self, trades: u64) -> Self {
        self.record.trades = Some(trades);
        self
    }

    pub fn orders(mut self, orders: u64) -> Self {
        self.record.orders = Some(orders);
        self
    }

    pub fn without_scenario(mut self) -> Self {
        self.record.scenario = None;
        self
    }

    pub fn without_throughput(mut self) -> Self {
        self.record.throughput = None;
        self
    }

    pub fn without_orders(mut self) -> Self {
        self.record.orders = None;
        self
    }

    /// Finishes the record.
    pub fn build(self) -> BenchmarkRecord {
        self.record
    }
}
