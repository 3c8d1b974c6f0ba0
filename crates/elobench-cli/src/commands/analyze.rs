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

//! The analysis command.

use super::{read_file, write_output};
use crate::error::CliError;
use elobench_csv::load_records;
use elobench_report::{generate_report, ReportConfig, ReportFormat};
use tracing::debug;

/// Loads `input`, analyzes it and writes the report in `format`.
///
/// Nothing is written unless every step succeeds.
///
/// # Errors
///
/// - [`CliError::Report`] for an unknown `format` or a failed analysis
/// - [`CliError::FileNotFound`], [`CliError::FileTooLarge`] or
///   [`CliError::Io`] for file problems
/// - [`CliError::InvalidInput`] for an empty file
/// - [`CliError::Load`] for malformed CSV
pub fn analyze(input: &str, format: &str, output: Option<&str>) -> Result<(), CliError> {
    let format: ReportFormat = format.parse()?;

    let content = read_file(input)?;
    if content.trim().is_empty() {
        return Err(CliError::invalid_input(format!("'{}' is empty", input)));
    }

    let store = load_records(&content)?;
    debug!(path = input, rows = store.len(), %format, "analyzing benchmark results");

    let config = ReportConfig {
        format,
        source_label: Some(input.to_string()),
    };
    let report = generate_report(&store, &config)?;

    write_output(&report, output)
}
