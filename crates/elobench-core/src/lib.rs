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

//! Record store and analysis engine for ELOB benchmark results.
//!
//! A benchmark run produces one [`BenchmarkRecord`] per measured trial. This
//! crate holds those records in a [`RecordStore`] and derives three views
//! over them:
//!
//! - [`analyze_by_scenario`]: per-scenario rows plus throughput statistics
//! - [`analyze_by_order_count`]: per-input-size rows plus the best scenario
//! - [`analyze_scalability`]: per-scenario efficiency and scaling factor
//!
//! The analyzers are pure functions over a shared, read-only store. They can
//! run in any order or concurrently.
//!
//! # Examples
//!
//! ```
//! use elobench_core::{analyze_by_order_count, BenchmarkRecord, RecordStore};
//!
//! let store = RecordStore::new(vec![
//!     BenchmarkRecord::new("fast", 1000, 0.01, 100_000.0, 50, 100),
//!     BenchmarkRecord::new("slow", 1000, 0.02, 50_000.0, 10, 100),
//! ]);
//!
//! let buckets = analyze_by_order_count(&store).unwrap();
//! assert_eq!(buckets[0].best.scenario, "fast");
//! ```
//!
//! # Errors
//!
//! Every analyzer validates the store before computing anything and fails
//! with [`AnalysisError::EmptyDataset`], [`AnalysisError::MissingField`] or
//! [`AnalysisError::DivisionByZero`]. No analyzer returns partial output.

pub mod analysis;
mod error;
mod record;
pub mod stats;
mod store;

pub use analysis::order_count::{
    analyze_by_order_count, select_best, BestScenario, OrderCountRow, OrderCountSummary,
};
pub use analysis::scalability::{
    analyze_scalability, ScalabilityProfile, ScalabilityRow, ScalingFactor,
};
pub use analysis::scenario::{analyze_by_scenario, ScenarioRow, ScenarioSummary};
pub use error::{AnalysisError, Result};
pub use record::{BenchmarkRecord, Field, Trial};
pub use stats::ThroughputStats;
pub use store::RecordStore;
