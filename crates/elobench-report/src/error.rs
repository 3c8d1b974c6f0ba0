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

//! Error types for report generation.

use elobench_core::AnalysisError;
use thiserror::Error;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while assembling or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// One of the analyzers rejected the record store.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unrecognized output format name.
    #[error("Unknown report format '{0}' (expected text, markdown or json)")]
    UnknownFormat(String),
}
