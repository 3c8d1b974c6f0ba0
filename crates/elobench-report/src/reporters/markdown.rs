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

//! Markdown report.

use crate::report::AnalysisReport;
use crate::sections::sections;
use std::fmt::Write;

/// Renders the report as GitHub-flavored Markdown.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str("# ELOB Benchmark Analysis\n\n");
    let _ = write!(md, "**Rows:** {}", report.record_count);
    if let Some(source) = &report.source {
        let _ = write!(md, " from `{}`", source);
    }
    md.push_str("\n\n");

    for section in sections(report) {
        let _ = writeln!(md, "## {}\n", title_case(section.title));
        for group in &section.groups {
            let _ = writeln!(md, "### {}\n", group.heading);
            md.push_str(&group.table.render_markdown());
            let _ = writeln!(md, "\n{}\n", group.summary);
        }
    }

    md
}

/// `PERFORMANCE ANALYSIS BY SCENARIO` -> `Performance Analysis by Scenario`.
fn title_case(title: &str) -> String {
    title
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && lower == "by" {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
