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

//! CLI error type.

use elobench_csv::CsvError;
use elobench_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop `elobench` from producing a report.
///
/// `main` prints the error as a single `Error: ...` line and exits with
/// status 1.
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file does not exist.
    #[error("{path} not found")]
    FileNotFound { path: PathBuf },

    /// The input file exceeds `ELOBENCH_MAX_FILE_SIZE`.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Reading the input or writing the report failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// The input is not a valid benchmark CSV.
    #[error("Failed to load benchmark CSV: {0}")]
    Load(#[from] CsvError),

    /// Analysis or rendering failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elobench_core::AnalysisError;

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound {
            path: PathBuf::from("bench_results.csv"),
        };
        assert_eq!(err.to_string(), "bench_results.csv not found");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.csv", 3 * 1024 * 1024, 2 * 1024 * 1024);
        assert_eq!(
            err.to_string(),
            "File 'big.csv' is too large (3145728 bytes). Maximum allowed: 2097152 bytes (2 MB)"
        );
    }

    #[test]
    fn test_analysis_error_passes_through() {
        let err = CliError::from(ReportError::from(AnalysisError::EmptyDataset));
        assert_eq!(err.to_string(), AnalysisError::EmptyDataset.to_string());
    }

    #[test]
    fn test_load_error_display() {
        let err = CliError::from(CsvError::MissingColumn("orders".to_string()));
        assert!(err.to_string().starts_with("Failed to load benchmark CSV: "));
        assert!(err.to_string().contains("orders"));
    }
}
