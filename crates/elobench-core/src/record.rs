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

//! Benchmark records and their validated trial view.

use crate::error::{AnalysisError, Result};
use std::fmt;

/// A required field of a benchmark record.
///
/// Displays as the CSV column name the bench runner writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Scenario name.
    Scenario,
    /// Configured input size (`N`).
    OrderCount,
    /// Wall-clock duration in seconds.
    Seconds,
    /// Operations per second.
    Throughput,
    /// Matched events produced.
    Trades,
    /// Submitted events.
    Orders,
}

impl Field {
    /// All required fields, in column order.
    pub const ALL: [Field; 6] = [
        Field::Scenario,
        Field::OrderCount,
        Field::Seconds,
        Field::Throughput,
        Field::Trades,
        Field::Orders,
    ];

    /// Column name in the benchmark CSV.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Scenario => "scenario",
            Field::OrderCount => "N",
            Field::Seconds => "seconds",
            Field::Throughput => "throughput_ops_s",
            Field::Trades => "trades",
            Field::Orders => "orders",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One measured trial as loaded from the source.
///
/// Fields are optional so that a row with a blank cell can still be stored
/// and reported precisely. Analyzers reject incomplete records through
/// [`BenchmarkRecord::to_trial`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkRecord {
    pub scenario: Option<String>,
    pub order_count: Option<u64>,
    pub seconds: Option<f64>,
    pub throughput: Option<f64>,
    pub trades: Option<u64>,
    pub orders: Option<u64>,
}

impl BenchmarkRecord {
    /// Creates a fully populated record.
    pub fn new(
        scenario: impl Into<String>,
        order_count: u64,
        seconds: f64,
        throughput: f64,
        trades: u64,
        orders: u64,
    ) -> Self {
        Self {
            scenario: Some(scenario.into()),
            order_count: Some(order_count),
            seconds: Some(seconds),
            throughput: Some(throughput),
            trades: Some(trades),
            orders: Some(orders),
        }
    }

    /// Returns the first absent field in column order, if any.
    ///
    /// An empty scenario name counts as absent.
    pub fn missing_field(&self) -> Option<Field> {
        if self.scenario.as_deref().map_or(true, str::is_empty) {
            return Some(Field::Scenario);
        }
        if self.order_count.is_none() {
            return Some(Field::OrderCount);
        }
        if self.seconds.is_none() {
            return Some(Field::Seconds);
        }
        if self.throughput.is_none() {
            return Some(Field::Throughput);
        }
        if self.trades.is_none() {
            return Some(Field::Trades);
        }
        if self.orders.is_none() {
            return Some(Field::Orders);
        }
        None
    }

    /// Validates this record and borrows it as a [`Trial`].
    ///
    /// `index` is the record's zero-based load position.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingField`] naming the first absent field.
    pub fn to_trial(&self, index: usize) -> Result<Trial<'_>> {
        let missing = |field| AnalysisError::MissingField {
            row: index + 1,
            field,
        };

        let scenario = self
            .scenario
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| missing(Field::Scenario))?;

        Ok(Trial {
            index,
            scenario,
            order_count: self.order_count.ok_or_else(|| missing(Field::OrderCount))?,
            seconds: self.seconds.ok_or_else(|| missing(Field::Seconds))?,
            throughput: self.throughput.ok_or_else(|| missing(Field::Throughput))?,
            trades: self.trades.ok_or_else(|| missing(Field::Trades))?,
            orders: self.orders.ok_or_else(|| missing(Field::Orders))?,
        })
    }
}

/// A complete record borrowed from a [`RecordStore`](crate::RecordStore).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial<'a> {
    /// Zero-based load position. Used as the tie-break key.
    pub index: usize,
    pub scenario: &'a str,
    pub order_count: u64,
    pub seconds: f64,
    pub throughput: f64,
    pub trades: u64,
    pub orders: u64,
}

impl Trial<'_> {
    /// Percentage of submitted orders that produced trades.
    ///
    /// Not clamped: `trades > orders` yields a value above 100.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DivisionByZero`] when `orders` is zero.
    pub fn trade_ratio(&self) -> Result<f64> {
        if self.orders == 0 {
            return Err(AnalysisError::division_by_zero(format!(
                "trade ratio for '{}' at N={} (orders = 0)",
                self.scenario, self.order_count
            )));
        }
        Ok(self.trades as f64 / self.orders as f64 * 100.0)
    }

    /// Throughput normalized by input size, in ops per order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DivisionByZero`] when the order count is zero.
    pub fn efficiency(&self) -> Result<f64> {
        if self.order_count == 0 {
            return Err(AnalysisError::division_by_zero(format!(
                "efficiency for '{}' (N = 0)",
                self.scenario
            )));
        }
        Ok(self.throughput / self.order_count as f64)
    }
}
