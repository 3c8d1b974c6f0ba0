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

//! Benchmark CSV loading for ELOBench.
//!
//! Reads the results file written by the order book bench runner into a
//! [`RecordStore`](elobench_core::RecordStore):
//!
//! ```text
//! scenario,N,seconds,throughput_ops_s,trades,orders
//! same_price,1000,0.000412,2.42718e+06,500,1000
//! spread,1000,0.000538,1.85874e+06,312,1000
//! ```
//!
//! # Features
//!
//! - **Header-driven**: required columns are located by name, in any order;
//!   extra columns are ignored
//! - **Typed cells**: counts parse as `u64`, measurements as finite,
//!   non-negative `f64`
//! - **Blank cells preserved**: an empty cell loads as an absent field so the
//!   analyzers can name it, rather than failing here
//! - **Bounded**: a configurable row limit guards memory
//!
//! # Examples
//!
//! ```no_run
//! use elobench_csv::{load_file, LoadConfig};
//!
//! let store = load_file("bench_results.csv", &LoadConfig::default()).unwrap();
//! println!("{} rows", store.len());
//! ```

mod error;
mod loader;

pub use error::{CsvError, Result};
pub use loader::{
    load_file, load_records, load_records_reader, load_records_with_config, LoadConfig,
    DEFAULT_MAX_ROWS,
};
