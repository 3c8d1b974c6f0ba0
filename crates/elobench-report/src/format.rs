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

//! Number and label formatting shared by the reporters.

use elobench_core::{ScalingFactor, ThroughputStats};

/// Width of the `=` banner around section titles.
pub const BANNER_WIDTH: usize = 80;

/// Width of the `-` rule under group headings.
pub const GROUP_RULE_WIDTH: usize = 40;

const COUNT_UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Formats an order count compactly for labels.
///
/// A unit is used only when the label is exact to one decimal place, so
/// distinct counts never share a label. Anything else prints in full.
///
/// # Examples
///
/// ```
/// use elobench_report::compact_count;
///
/// assert_eq!(compact_count(1000), "1K");
/// assert_eq!(compact_count(50_000), "50K");
/// assert_eq!(compact_count(2_500_000), "2.5M");
/// assert_eq!(compact_count(750), "750");
/// assert_eq!(compact_count(1040), "1040");
/// ```
pub fn compact_count(n: u64) -> String {
    for (scale, suffix) in COUNT_UNITS {
        let tenth = scale / 10;
        if n >= scale && n % tenth == 0 {
            let whole = n / scale;
            let frac = (n % scale) / tenth;
            return if frac == 0 {
                format!("{}{}", whole, suffix)
            } else {
                format!("{}.{}{}", whole, frac, suffix)
            };
        }
    }
    n.to_string()
}

pub fn seconds(value: f64) -> String {
    format!("{:.6}", value)
}

pub fn throughput(value: f64) -> String {
    format!("{:.0}", value)
}

pub fn scaling(value: f64) -> String {
    format!("{:.2}x", value)
}

/// `Throughput stats: min=…, max=…, mean=…, std=…`, with `n/a` for a
/// single-sample standard deviation.
pub fn stats_line(stats: &ThroughputStats) -> String {
    let std = stats
        .std_dev
        .map(throughput)
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "Throughput stats: min={}, max={}, mean={}, std={}",
        throughput(stats.min),
        throughput(stats.max),
        throughput(stats.mean),
        std
    )
}

pub fn best_line(order_count: u64, scenario: &str, best_throughput: f64) -> String {
    format!(
        "✓ Best scenario for N={}: {} ({} ops/s)",
        order_count,
        scenario,
        throughput(best_throughput)
    )
}

pub fn scaling_line(scaling_factor: Option<&ScalingFactor>) -> String {
    match scaling_factor {
        Some(sf) => format!(
            "Scaling factor ({}/{}): {}",
            compact_count(sf.largest_order_count),
            compact_count(sf.smallest_order_count),
            scaling(sf.factor)
        ),
        None => "Scaling factor: n/a (single order count)".to_string(),
    }
}
