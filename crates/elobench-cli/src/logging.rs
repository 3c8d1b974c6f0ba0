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

//! Diagnostic logging setup.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "elobench=warn";

const VERBOSE_DIRECTIVE: &str = "elobench=debug";

/// Builds the log filter from `RUST_LOG`, raised to debug when `verbose`.
pub fn filter(verbose: bool) -> EnvFilter {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match (verbose, VERBOSE_DIRECTIVE.parse::<Directive>()) {
        (true, Ok(directive)) => filter.add_directive(directive),
        _ => filter,
    }
}

/// Installs the stderr subscriber. Stdout carries only the report.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_directive_parses() {
        assert!(VERBOSE_DIRECTIVE.parse::<Directive>().is_ok());
        assert!(DEFAULT_FILTER.parse::<Directive>().is_ok());
    }

    #[test]
    fn test_verbose_filter_mentions_debug() {
        assert!(filter(true).to_string().contains("elobench=debug"));
    }
}
