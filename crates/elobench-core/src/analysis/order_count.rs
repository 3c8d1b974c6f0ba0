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

//! Per-order-count analysis and best-scenario selection.

use super::group_by;
use crate::error::{AnalysisError, Result};
use crate::record::Trial;
use crate::store::RecordStore;
use tracing::debug;

/// One scenario's trial within an order-count bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderCountRow {
    pub scenario: String,
    pub seconds: f64,
    pub throughput: f64,
    pub trades: u64,
    pub trade_ratio: f64,
}

/// The highest-throughput trial in a bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BestScenario {
    pub scenario: String,
    pub throughput: f64,
}

/// All trials that ran at one order count, sorted by scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderCountSummary {
    pub order_count: u64,
    pub rows: Vec<OrderCountRow>,
    pub best: BestScenario,
}

/// Picks the trial with the highest throughput.
///
/// A candidate replaces the current pick only if its throughput is strictly
/// greater, or equal with a smaller load index. The first-loaded record
/// therefore wins every tie regardless of the slice order. NaN never
/// compares greater and is never picked over a number.
///
/// Returns `None` for an empty slice.
pub fn select_best<'s, 'a>(trials: &'s [Trial<'a>]) -> Option<&'s Trial<'a>> {
    let mut best: Option<&Trial<'a>> = None;

    for candidate in trials {
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let wins = candidate.throughput > current.throughput
                    || (candidate.throughput == current.throughput
                        && candidate.index < current.index);
                if wins {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// Groups the store by order count.
///
/// Buckets come out in ascending numeric order. Rows within a bucket are
/// sorted lexicographically by scenario; equal names keep load order.
///
/// # Errors
///
/// Fails on an empty store, an incomplete record, or a record with zero
/// orders.
pub fn analyze_by_order_count(store: &RecordStore) -> Result<Vec<OrderCountSummary>> {
    let trials = store.trials()?;
    let groups = group_by(&trials, |t| t.order_count);
    debug!(buckets = groups.len(), "grouped records by order count");

    let mut summaries = Vec::with_capacity(groups.len());
    for (order_count, mut group) in groups {
        let best = select_best(&group)
            .map(|t| BestScenario {
                scenario: t.scenario.to_string(),
                throughput: t.throughput,
            })
            .ok_or(AnalysisError::EmptyDataset)?;

        group.sort_by(|a, b| a.scenario.cmp(b.scenario));
        let rows = group
            .iter()
            .map(|t| {
                Ok(OrderCountRow {
                    scenario: t.scenario.to_string(),
                    seconds: t.seconds,
                    throughput: t.throughput,
                    trades: t.trades,
                    trade_ratio: t.trade_ratio()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(order_count, best = %best.scenario, "selected best scenario");
        summaries.push(OrderCountSummary {
            order_count,
            rows,
            best,
        });
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchmarkRecord;

    fn store(rows: &[(&str, u64, f64)]) -> RecordStore {
        rows.iter()
            .map(|&(s, n, tp)| BenchmarkRecord::new(s, n, 0.01, tp, 1, 10))
            .collect()
    }

    #[test]
    fn test_buckets_ascending() {
        let store = store(&[("a", 50_000, 1.0), ("a", 1000, 1.0), ("a", 10_000, 1.0)]);
        let counts: Vec<_> = analyze_by_order_count(&store)
            .unwrap()
            .iter()
            .map(|s| s.order_count)
            .collect();
        assert_eq!(counts, [1000, 10_000, 50_000]);
    }

    #[test]
    fn test_rows_sorted_by_scenario() {
        let store = store(&[
            ("spread", 1000, 1.0),
            ("crossing", 1000, 2.0),
            ("same_price", 1000, 3.0),
        ]);
        let summary = &analyze_by_order_count(&store).unwrap()[0];
        let names: Vec<_> = summary.rows.iter().map(|r| r.scenario.as_str()).collect();
        assert_eq!(names, ["crossing", "same_price", "spread"]);
        assert_eq!(summary.best.scenario, "same_price");
    }

    #[test]
    fn test_tie_goes_to_first_loaded() {
        // "zeta" loads first; it must win even though "alpha" sorts first.
        let store = store(&[
            ("zeta", 1000, 500.0),
            ("alpha", 1000, 500.0),
            ("mid", 1000, 100.0),
        ]);
        let summary = &analyze_by_order_count(&store).unwrap()[0];
        assert_eq!(summary.best.scenario, "zeta");
        assert_eq!(summary.best.throughput, 500.0);
    }

    #[test]
    fn test_select_best_ignores_slice_order() {
        let records = store(&[("first", 1000, 7.0), ("second", 1000, 7.0)]);
        let mut trials = records.trials().unwrap();
        trials.reverse();
        assert_eq!(select_best(&trials).unwrap().scenario, "first");
    }

    #[test]
    fn test_select_best_empty() {
        assert!(select_best(&[]).is_none());
    }
}
