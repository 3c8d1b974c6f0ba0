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

//! Scaling behavior per scenario.

use super::group_by;
use crate::error::{AnalysisError, Result};
use crate::store::RecordStore;
use tracing::debug;

/// One trial of a scenario with its per-order efficiency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalabilityRow {
    pub order_count: u64,
    pub throughput: f64,
    /// Throughput divided by order count.
    pub efficiency: f64,
}

/// Throughput ratio between the largest and smallest tested order counts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalingFactor {
    pub smallest_order_count: u64,
    pub largest_order_count: u64,
    /// `throughput(largest) / throughput(smallest)`.
    pub factor: f64,
}

/// Scaling view of one scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalabilityProfile {
    pub scenario: String,
    /// Ascending by order count.
    pub rows: Vec<ScalabilityRow>,
    /// `None` when the scenario ran at a single order count.
    pub scaling: Option<ScalingFactor>,
}

impl ScalingFactor {
    /// Computes the factor from rows sorted ascending by order count.
    ///
    /// Uses the first and last rows. Returns `Ok(None)` when they share an
    /// order count, since no scaling was exercised.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DivisionByZero`] when the smallest order
    /// count's throughput is exactly zero.
    pub fn from_sorted_rows(scenario: &str, rows: &[ScalabilityRow]) -> Result<Option<Self>> {
        let (first, last) = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(None),
        };

        if first.order_count == last.order_count {
            return Ok(None);
        }

        if first.throughput == 0.0 {
            return Err(AnalysisError::division_by_zero(format!(
                "scaling factor for '{}' (throughput at N={} is 0)",
                scenario, first.order_count
            )));
        }

        Ok(Some(Self {
            smallest_order_count: first.order_count,
            largest_order_count: last.order_count,
            factor: last.throughput / first.throughput,
        }))
    }
}

/// Builds a scaling profile per scenario.
///
/// Profiles come out in lexicographic scenario order, with rows ascending by
/// order count (equal counts keep load order).
///
/// # Errors
///
/// Fails on an empty store, an incomplete record, a zero order count, or a
/// zero throughput at a scenario's smallest order count.
pub fn analyze_scalability(store: &RecordStore) -> Result<Vec<ScalabilityProfile>> {
    let trials = store.trials()?;
    let groups = group_by(&trials, |t| t.scenario);
    debug!(scenarios = groups.len(), "computing scalability profiles");

    let mut profiles = Vec::with_capacity(groups.len());
    for (scenario, mut group) in groups {
        group.sort_by_key(|t| t.order_count);

        let rows = group
            .iter()
            .map(|t| {
                Ok(ScalabilityRow {
                    order_count: t.order_count,
                    throughput: t.throughput,
                    efficiency: t.efficiency()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let scaling = ScalingFactor::from_sorted_rows(scenario, &rows)?;
        if scaling.is_none() {
            debug!(scenario, "single order count, scaling factor undefined");
        }

        profiles.push(ScalabilityProfile {
            scenario: scenario.to_string(),
            rows,
            scaling,
        });
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchmarkRecord;

    #[test]
    fn test_scaling_factor_direction() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("spread", 50_000, 0.625, 80_000.0, 0, 50_000),
            BenchmarkRecord::new("spread", 1000, 0.1, 10_000.0, 0, 1000),
        ]);

        let profile = &analyze_scalability(&store).unwrap()[0];
        let scaling = profile.scaling.unwrap();
        assert_eq!(scaling.factor, 8.0);
        assert_eq!(scaling.smallest_order_count, 1000);
        assert_eq!(scaling.largest_order_count, 50_000);
    }

    #[test]
    fn test_efficiency_per_row() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("spread", 1000, 0.1, 10_000.0, 0, 1000),
            BenchmarkRecord::new("spread", 50_000, 0.625, 80_000.0, 0, 50_000),
        ]);
        let profile = &analyze_scalability(&store).unwrap()[0];
        assert_eq!(profile.rows[0].efficiency, 10.0);
        assert_eq!(profile.rows[1].efficiency, 1.6);
    }

    #[test]
    fn test_single_order_count_has_no_factor() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("slow", 1000, 0.02, 50_000.0, 10, 100),
            BenchmarkRecord::new("slow", 1000, 0.03, 40_000.0, 10, 100),
        ]);
        let profile = &analyze_scalability(&store).unwrap()[0];
        assert_eq!(profile.rows.len(), 2);
        assert!(profile.scaling.is_none());
    }

    #[test]
    fn test_zero_base_throughput() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("stalled", 1000, 0.1, 0.0, 0, 1000),
            BenchmarkRecord::new("stalled", 50_000, 0.1, 100.0, 0, 50_000),
        ]);
        assert!(matches!(
            analyze_scalability(&store),
            Err(AnalysisError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_throughput_single_count_is_fine() {
        let store = RecordStore::new(vec![BenchmarkRecord::new(
            "stalled", 1000, 0.1, 0.0, 0, 1000,
        )]);
        let profile = &analyze_scalability(&store).unwrap()[0];
        assert!(profile.scaling.is_none());
    }

    #[test]
    fn test_zero_order_count() {
        let store = RecordStore::new(vec![BenchmarkRecord::new("x", 0, 0.1, 10.0, 0, 1)]);
        assert!(matches!(
            analyze_scalability(&store),
            Err(AnalysisError::DivisionByZero { .. })
        ));
    }
}
