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

//! Report assembly.

use crate::error::Result;
use elobench_core::{
    analyze_by_order_count, analyze_by_scenario, analyze_scalability, OrderCountSummary,
    RecordStore, ScalabilityProfile, ScenarioSummary,
};
use serde::Serialize;
use tracing::debug;

/// The three analyses of one record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Where the records came from, if known.
    pub source: Option<String>,
    pub record_count: usize,
    pub scenarios: Vec<ScenarioSummary>,
    pub order_counts: Vec<OrderCountSummary>,
    pub scalability: Vec<ScalabilityProfile>,
}

impl AnalysisReport {
    /// Runs all three analyzers over `store`.
    ///
    /// The analyzers run concurrently. Their errors are checked in report
    /// order (scenario, order count, scalability) so the reported error does
    /// not depend on scheduling.
    ///
    /// # Errors
    ///
    /// The first analyzer error, as a [`ReportError::Analysis`]. Nothing is
    /// returned on failure.
    ///
    /// [`ReportError::Analysis`]: crate::ReportError::Analysis
    pub fn build(store: &RecordStore, source: Option<&str>) -> Result<Self> {
        let (scenarios, (order_counts, scalability)) = rayon::join(
            || analyze_by_scenario(store),
            || {
                rayon::join(
                    || analyze_by_order_count(store),
                    || analyze_scalability(store),
                )
            },
        );

        let report = Self {
            source: source.map(str::to_string),
            record_count: store.len(),
            scenarios: scenarios?,
            order_counts: order_counts?,
            scalability: scalability?,
        };

        debug!(
            scenarios = report.scenarios.len(),
            order_counts = report.order_counts.len(),
            "assembled analysis report"
        );
        Ok(report)
    }
}
