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

//! Error types for benchmark analysis.

use crate::record::Field;
use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Conditions that stop an analysis pass.
///
/// All variants are fatal for the pass that raised them. Callers get a
/// distinct, named condition; nothing is converted into a default value.
///
/// # Examples
///
/// ```
/// use elobench_core::{AnalysisError, Field};
///
/// let err = AnalysisError::MissingField { row: 3, field: Field::Orders };
/// assert_eq!(err.to_string(), "Missing field 'orders' in record 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The record store holds zero records.
    #[error("Empty dataset: no benchmark records to analyze")]
    EmptyDataset,

    /// A record lacks a value for a required field.
    #[error("Missing field '{field}' in record {row}")]
    MissingField {
        /// 1-based load position of the offending record.
        row: usize,
        /// The field that has no value.
        field: Field,
    },

    /// A ratio's denominator is zero.
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// Which computation failed and for which group.
        context: String,
    },
}

impl AnalysisError {
    /// Create a division-by-zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_display() {
        assert_eq!(
            AnalysisError::EmptyDataset.to_string(),
            "Empty dataset: no benchmark records to analyze"
        );
    }

    #[test]
    fn test_missing_field_uses_column_name() {
        let err = AnalysisError::MissingField {
            row: 7,
            field: Field::OrderCount,
        };
        let msg = err.to_string();
        assert!(msg.contains("'N'"));
        assert!(msg.contains("record 7"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = AnalysisError::division_by_zero("trade ratio for 'spread' at N=1000");
        assert_eq!(
            err.to_string(),
            "Division by zero: trade ratio for 'spread' at N=1000"
        );
    }
}
