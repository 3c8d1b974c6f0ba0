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

//! Output formats for an [`AnalysisReport`].

pub mod json;
pub mod markdown;
pub mod text;

pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

use crate::error::{ReportError, Result};
use crate::report::AnalysisReport;
use elobench_core::RecordStore;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Terminal text with grid tables.
    #[default]
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    pub const fn name(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Report generation options.
///
/// # Examples
///
/// ```
/// use elobench_report::{ReportConfig, ReportFormat};
///
/// let config = ReportConfig {
///     format: ReportFormat::Markdown,
///     source_label: Some("bench_results.csv".to_string()),
/// };
/// assert_eq!(ReportConfig::default().format, ReportFormat::Text);
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,

    /// Input name shown in the report preamble.
    pub source_label: Option<String>,
}

impl AnalysisReport {
    /// Renders this report in `format`.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        let output = match format {
            ReportFormat::Text => render_text(self),
            ReportFormat::Markdown => render_markdown(self),
            ReportFormat::Json => render_json(self)?,
        };
        debug!(format = %format, bytes = output.len(), "rendered report");
        Ok(output)
    }
}

/// Analyzes `store` and renders the full report.
///
/// # Errors
///
/// Fails without output if any analyzer fails (see
/// [`AnalysisReport::build`]) or JSON serialization fails.
pub fn generate_report(store: &RecordStore, config: &ReportConfig) -> Result<String> {
    AnalysisReport::build(store, config.source_label.as_deref())?.render(config.format)
}
