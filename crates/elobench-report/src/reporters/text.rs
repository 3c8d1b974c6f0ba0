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

//! Plain-text report with grid tables.

use crate::format::{BANNER_WIDTH, GROUP_RULE_WIDTH};
use crate::report::AnalysisReport;
use crate::sections::sections;
use std::fmt::Write;

/// Renders the report as terminal text.
pub fn render_text(report: &AnalysisReport) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(GROUP_RULE_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", preamble(report));

    for section in sections(report) {
        let _ = write!(out, "\n{banner}\n{}\n{banner}\n", section.title);
        for group in &section.groups {
            let _ = write!(out, "\n{}:\n{rule}\n", group.heading);
            out.push_str(&group.table.render_grid());
            let _ = writeln!(out, "\n{}", group.summary);
        }
    }

    let _ = writeln!(out, "\n{banner}");
    out
}

fn preamble(report: &AnalysisReport) -> String {
    match &report.source {
        Some(source) => format!(
            "Loaded {} benchmark rows from {}",
            report.record_count, source
        ),
        None => format!("Loaded {} benchmark rows", report.record_count),
    }
}
