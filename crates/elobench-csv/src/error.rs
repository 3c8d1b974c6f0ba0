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

//! Error types for benchmark CSV loading.

use thiserror::Error;

/// Result type for CSV loading.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV loading error types.
///
/// These are load-time failures. A row that loads but has a blank cell is not
/// an error here; the analyzers report it as a missing field.
///
/// # Examples
///
/// ```
/// use elobench_csv::CsvError;
///
/// let err = CsvError::InvalidValue {
///     row: 3,
///     column: "N".to_string(),
///     expected: "non-negative integer",
///     value: "many".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Invalid value in column 'N' at row 3: expected non-negative integer, got 'many'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A required column is absent from the header.
    ///
    /// ```
    /// use elobench_csv::CsvError;
    ///
    /// let err = CsvError::MissingColumn("orders".to_string());
    /// assert_eq!(err.to_string(), "Missing required column: orders");
    /// ```
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as its column's type.
    #[error("Invalid value in column '{column}' at row {row}: expected {expected}, got '{value}'")]
    InvalidValue {
        /// Data row (1-based, header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Expected type description.
        expected: &'static str,
        /// The offending cell text.
        value: String,
    },

    /// Malformed CSV at a specific data row.
    #[error("CSV parse error at row {row}: {message}")]
    ParseError {
        /// Data row (1-based, header excluded).
        row: usize,
        /// Detailed error message.
        message: String,
    },

    /// Row count exceeded the configured limit.
    ///
    /// ```
    /// use elobench_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit { limit: 10, actual: 11 };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count reached when loading stopped.
        actual: usize,
    },

    /// I/O error while reading the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}
