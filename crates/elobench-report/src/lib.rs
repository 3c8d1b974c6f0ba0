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

//! Report generation for ELOB benchmark analysis.
//!
//! Runs the three analyzers of [`elobench_core`] over a record store and
//! renders the result as text, Markdown or JSON.
//!
//! # Examples
//!
//! ```
//! use elobench_core::{BenchmarkRecord, RecordStore};
//! use elobench_report::{generate_report, ReportConfig};
//!
//! let store = RecordStore::new(vec![
//!     BenchmarkRecord::new("fast", 1000, 0.01, 100_000.0, 50, 100),
//!     BenchmarkRecord::new("slow", 1000, 0.02, 50_000.0, 10, 100),
//! ]);
//!
//! let text = generate_report(&store, &ReportConfig::default()).unwrap();
//! assert!(text.contains("✓ Best scenario for N=1000: fast (100000 ops/s)"));
//! ```

mod error;
pub mod format;
mod report;
pub mod reporters;
mod sections;
mod table;

pub use error::{ReportError, Result};
pub use format::compact_count;
pub use report::AnalysisReport;
pub use reporters::{
    generate_report, render_json, render_markdown, render_text, ReportConfig, ReportFormat,
};
pub use table::{Table, TableCell};
