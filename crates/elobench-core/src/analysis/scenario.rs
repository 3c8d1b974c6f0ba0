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

//! Per-scenario analysis.

use super::group_by;
use crate::error::{AnalysisError, Result};
use crate::record::Trial;
use crate::stats::ThroughputStats;
use crate::store::RecordStore;
use tracing::debug;

/// One trial of a scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioRow {
    pub order_count: u64,
    pub seconds: f64,
    pub throughput: f64,
    pub trades: u64,
    /// Trades as a percentage of orders.
    pub trade_ratio: f64,
}

/// All trials of one scenario, ascending by order count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioSummary {
    pub scenario: String,
    pub rows: Vec<ScenarioRow>,
    pub stats: ThroughputStats,
}

/// Groups the store by scenario.
///
/// Summaries come out in lexicographic scenario order. Rows within a summary
/// are sorted ascending by order count; equal counts keep load order.
/// Statistics are taken over the group's throughput values.
///
/// # Errors
///
/// Fails on an empty store, an incomplete record, or a record with zero
/// orders.
pub fn analyze_by_scenario(store: &RecordStore) -> Result<Vec<ScenarioSummary>> {
    let trials = store.trials()?;
    let groups = group_by(&trials, |t| t.scenario);
    debug!(scenarios = groups.len(), "grouped records by scenario");

    groups
        .into_iter()
        .map(|(scenario, group)| summarize(scenario, group))
        .collect()
}

/// Builds one scenario's summary from its trials in load order.
fn summarize(scenario: &str, mut group: Vec<Trial<'_>>) -> Result<ScenarioSummary> {
    let throughputs: Vec<f64> = group.iter().map(|t| t.throughput).collect();
    let stats = ThroughputStats::from_values(&throughputs).ok_or(AnalysisError::EmptyDataset)?;

    group.sort_by_key(|t| t.order_count);
    let rows = group
        .iter()
        .map(|t| {
            Ok(ScenarioRow {
                order_count: t.order_count,
                seconds: t.seconds,
                throughput: t.throughput,
                trades: t.trades,
                trade_ratio: t.trade_ratio()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScenarioSummary {
        scenario: scenario.to_string(),
        rows,
        stats,
    })
}
