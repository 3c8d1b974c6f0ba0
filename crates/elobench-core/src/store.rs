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

//! In-memory record store.

use crate::error::{AnalysisError, Result};
use crate::record::{BenchmarkRecord, Trial};

/// An ordered, immutable collection of benchmark records.
///
/// Load order is preserved and is the tie-break key for best-scenario
/// selection. The store has no interior mutability, so a shared reference
/// can be handed to several analyzers at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<BenchmarkRecord>,
}

impl RecordStore {
    /// Creates a store from records in load order.
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Iterates over records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkRecord> {
        self.records.iter()
    }

    /// Validates every record and returns them as trials in load order.
    ///
    /// This is the input boundary shared by all analyzers.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyDataset`] if the store is empty
    /// - [`AnalysisError::MissingField`] for the first incomplete record
    pub fn trials(&self) -> Result<Vec<Trial<'_>>> {
        if self.records.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| record.to_trial(index))
            .collect()
    }
}

impl From<Vec<BenchmarkRecord>> for RecordStore {
    fn from(records: Vec<BenchmarkRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<BenchmarkRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = BenchmarkRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a BenchmarkRecord;
    type IntoIter = std::slice::Iter<'a, BenchmarkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
