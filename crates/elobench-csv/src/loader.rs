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

//! CSV → [`RecordStore`] loading.

use crate::error::{CsvError, Result};
use csv::StringRecord;
use elobench_core::{BenchmarkRecord, Field, RecordStore};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default maximum number of data rows accepted from one source.
///
/// Bench runs produce tens of rows; the limit only guards against feeding
/// the tool an unrelated, very large file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for benchmark CSV loading.
///
/// # Examples
///
/// ```
/// # use elobench_csv::LoadConfig;
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let tsv = LoadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Trim whitespace around headers and cells (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    indices: [usize; 6],
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut indices = [0; 6];
        for (slot, field) in indices.iter_mut().zip(Field::ALL) {
            *slot = headers
                .iter()
                .position(|h| h == field.column())
                .ok_or_else(|| CsvError::MissingColumn(field.column().to_string()))?;
        }
        Ok(Self { indices })
    }

    fn cell<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        let idx = self.indices[field as usize];
        record.get(idx).filter(|cell| !cell.is_empty())
    }
}

/// Parses benchmark CSV text with the default configuration.
///
/// # Examples
///
/// ```
/// use elobench_csv::load_records;
///
/// let csv = "scenario,N,seconds,throughput_ops_s,trades,orders\n\
///            spread,1000,0.01,100000,50,100\n";
/// let store = load_records(csv).unwrap();
/// assert_eq!(store.len(), 1);
/// ```
///
/// # Errors
///
/// See [`load_records_reader`].
pub fn load_records(csv: &str) -> Result<RecordStore> {
    load_records_reader(csv.as_bytes(), &LoadConfig::default())
}

/// Parses benchmark CSV text with a custom configuration.
pub fn load_records_with_config(csv: &str, config: &LoadConfig) -> Result<RecordStore> {
    load_records_reader(csv.as_bytes(), config)
}

/// Opens and parses a benchmark CSV file.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the file cannot be opened, otherwise as
/// [`load_records_reader`].
pub fn load_file(path: impl AsRef<Path>, config: &LoadConfig) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = load_records_reader(file, config)?;
    debug!(path = %path.display(), rows = store.len(), "loaded benchmark file");
    Ok(store)
}

/// Parses benchmark CSV from any reader.
///
/// The first row must be a header naming every required column
/// (`scenario`, `N`, `seconds`, `throughput_ops_s`, `trades`, `orders`), in
/// any order. Other columns are ignored. Blank cells load as absent fields.
///
/// # Errors
///
/// - [`CsvError::MissingColumn`] if a required column is not in the header
/// - [`CsvError::InvalidValue`] if a cell does not parse, or a count or
///   measurement is negative, or a float is not finite
/// - [`CsvError::ParseError`] for malformed rows (e.g. wrong width)
/// - [`CsvError::SecurityLimit`] past `config.max_rows` rows
pub fn load_records_reader<R: Read>(reader: R, config: &LoadConfig) -> Result<RecordStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        if row_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: row_idx + 1,
            });
        }

        let row = row_idx + 1;
        let record = result.map_err(|e| CsvError::ParseError {
            row,
            message: e.to_string(),
        })?;

        records.push(parse_record(&record, &columns, row)?);
    }

    debug!(rows = records.len(), "parsed benchmark rows");
    Ok(RecordStore::new(records))
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnMap,
    row: usize,
) -> Result<BenchmarkRecord> {
    let count = |field| parse_count(columns.cell(record, field), field, row);
    let float = |field| parse_float(columns.cell(record, field), field, row);

    Ok(BenchmarkRecord {
        scenario: columns.cell(record, Field::Scenario).map(str::to_string),
        order_count: count(Field::OrderCount)?,
        seconds: float(Field::Seconds)?,
        throughput: float(Field::Throughput)?,
        trades: count(Field::Trades)?,
        orders: count(Field::Orders)?,
    })
}

fn parse_count(cell: Option<&str>, field: Field, row: usize) -> Result<Option<u64>> {
    cell.map(|text| {
        text.parse::<u64>().map_err(|_| CsvError::InvalidValue {
            row,
            column: field.column().to_string(),
            expected: "non-negative integer",
            value: text.to_string(),
        })
    })
    .transpose()
}

fn parse_float(cell: Option<&str>, field: Field, row: usize) -> Result<Option<f64>> {
    cell.map(|text| match text.parse::<f64>() {
        // Zero stays loadable so the analyzers can report it as a zero divisor
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(CsvError::InvalidValue {
            row,
            column: field.column().to_string(),
            expected: "non-negative finite number",
            value: text.to_string(),
        }),
    })
    .transpose()
}
