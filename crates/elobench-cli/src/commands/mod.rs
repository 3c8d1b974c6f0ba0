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

//! Command implementations and shared file helpers.

mod analyze;

pub use analyze::analyze;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input size: 1 GB.
///
/// Can be overridden via the `ELOBENCH_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "ELOBENCH_MAX_FILE_SIZE";

/// Reads the size limit from the environment, falling back to the default
/// when unset or unparseable.
fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Reads a file into a string after checking that it exists and is within
/// the `ELOBENCH_MAX_FILE_SIZE` limit.
///
/// # Errors
///
/// - [`CliError::FileNotFound`] if `path` does not exist
/// - [`CliError::FileTooLarge`] past the size limit
/// - [`CliError::Io`] if metadata or contents cannot be read
pub fn read_file(path: &str) -> Result<String, CliError> {
    read_file_with_limit(path, max_file_size())
}

pub(crate) fn read_file_with_limit(path: &str, max: u64) -> Result<String, CliError> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound { path: path.into() });
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Writes content to a file, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        match read_file("/nonexistent/bench_results.csv") {
            Err(CliError::FileNotFound { path }) => {
                assert_eq!(path.to_str(), Some("/nonexistent/bench_results.csv"));
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_within_limit() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "scenario\n").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(read_file_with_limit(path, 64).unwrap(), "scenario\n");
    }

    #[test]
    fn test_read_over_limit() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "0123456789").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(
            read_file_with_limit(path, 4),
            Err(CliError::FileTooLarge {
                actual: 10,
                max: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();
        write_output("report\n", Some(path)).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "report\n");
    }

    #[test]
    fn test_write_output_bad_path() {
        assert!(matches!(
            write_output("x", Some("/nonexistent/dir/report.txt")),
            Err(CliError::Io { .. })
        ));
    }
}
