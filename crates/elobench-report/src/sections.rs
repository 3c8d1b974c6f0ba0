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

//! Format-independent report layout.
//!
//! Each analysis becomes a [`Section`] of [`Group`]s: a heading, a table and a
//! one-line summary. The text and Markdown reporters only differ in how they
//! draw this structure.

use crate::format;
use crate::report::AnalysisReport;
use crate::table::{Table, TableCell};
use elobench_core::{OrderCountSummary, ScalabilityProfile, ScenarioSummary};

pub const SCENARIO_TITLE: &str = "PERFORMANCE ANALYSIS BY SCENARIO";
pub const ORDER_COUNT_TITLE: &str = "PERFORMANCE ANALYSIS BY ORDER COUNT";
pub const SCALABILITY_TITLE: &str = "SCALABILITY ANALYSIS";

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub heading: String,
    pub table: Table,
    pub summary: String,
}

/// Lays out the three analyses in report order.
pub fn sections(report: &AnalysisReport) -> Vec<Section> {
    vec![
        Section {
            title: SCENARIO_TITLE,
            groups: report.scenarios.iter().map(scenario_group).collect(),
        },
        Section {
            title: ORDER_COUNT_TITLE,
            groups: report.order_counts.iter().map(order_count_group).collect(),
        },
        Section {
            title: SCALABILITY_TITLE,
            groups: report.scalability.iter().map(scalability_group).collect(),
        },
    ]
}

fn scenario_group(summary: &ScenarioSummary) -> Group {
    let mut table = Table::new([
        "Orders",
        "Time (s)",
        "Throughput (ops/s)",
        "Trades",
        "Trade Ratio",
    ]);
    for row in &summary.rows {
        table.add_row(vec![
            TableCell::Integer(row.order_count),
            TableCell::decimal(row.seconds, 6),
            TableCell::decimal(row.throughput, 0),
            TableCell::Integer(row.trades),
            TableCell::percent(row.trade_ratio, 1),
        ]);
    }

    Group {
        heading: summary.scenario.to_uppercase(),
        table,
        summary: format::stats_line(&summary.stats),
    }
}

fn order_count_group(summary: &OrderCountSummary) -> Group {
    let mut table = Table::new([
        "Scenario",
        "Time (s)",
        "Throughput (ops/s)",
        "Trades",
        "Trade Ratio",
    ]);
    for row in &summary.rows {
        table.add_row(vec![
            TableCell::text(row.scenario.as_str()),
            TableCell::decimal(row.seconds, 6),
            TableCell::decimal(row.throughput, 0),
            TableCell::Integer(row.trades),
            TableCell::percent(row.trade_ratio, 1),
        ]);
    }

    Group {
        heading: format!("N={}", summary.order_count),
        table,
        summary: format::best_line(
            summary.order_count,
            &summary.best.scenario,
            summary.best.throughput,
        ),
    }
}

fn scalability_group(profile: &ScalabilityProfile) -> Group {
    let mut table = Table::new(["Orders", "Throughput (ops/s)", "Efficiency (ops/order)"]);
    for row in &profile.rows {
        table.add_row(vec![
            TableCell::Integer(row.order_count),
            TableCell::decimal(row.throughput, 0),
            TableCell::decimal(row.efficiency, 3),
        ]);
    }

    Group {
        heading: profile.scenario.to_uppercase(),
        table,
        summary: format::scaling_line(profile.scaling.as_ref()),
    }
}
