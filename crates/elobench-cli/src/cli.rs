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

//! Command-line arguments.

use crate::commands;
use crate::error::CliError;
use clap::Parser;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "bench_results.csv";

#[derive(Parser, Debug)]
#[command(name = "elobench")]
#[command(
    author,
    version,
    about = "ELOBench - Analyze Efficient Limit Order Book benchmark results",
    long_about = None
)]
pub struct Cli {
    /// Path to benchmark CSV file
    #[arg(default_value = DEFAULT_INPUT)]
    pub csv_file: String,

    /// Report format: text, markdown or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log analysis steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn execute(&self) -> Result<(), CliError> {
        commands::analyze(&self.csv_file, &self.format, self.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["elobench"]).unwrap();
        assert_eq!(cli.csv_file, "bench_results.csv");
        assert_eq!(cli.format, "text");
        assert_eq!(cli.output, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "elobench", "runs.csv", "--format", "json", "-o", "out.json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.csv_file, "runs.csv");
        assert_eq!(cli.format, "json");
        assert_eq!(cli.output.as_deref(), Some("out.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
