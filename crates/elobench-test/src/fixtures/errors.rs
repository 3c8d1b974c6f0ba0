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

//! Malformed inputs for error-path tests.

/// CSV texts the loader must reject, as (name, csv).
pub fn invalid_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "missing_orders_column",
            "scenario,N,seconds,throughput_ops_s,trades\nfast,1000,0.01,100000,50\n",
        ),
        (
            "missing_scenario_column",
            "N,seconds,throughput_ops_s,trades,orders\n1000,0.01,100000,50,100\n",
        ),
        (
            "non_numeric_n",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,many,0.01,100000,50,100\n",
        ),
        (
            "negative_trades",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,0.01,100000,-5,100\n",
        ),
        (
            "infinite_throughput",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,0.01,inf,50,100\n",
        ),
        (
            "negative_throughput",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,0.01,-10000,50,100\n",
        ),
        (
            "negative_seconds",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,-0.01,10000,50,100\n",
        ),
        (
            "ragged_row",
            "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,0.01\n",
        ),
    ]
}

/// CSV with a blank `orders` cell: loads, but fails analysis.
pub const BLANK_ORDERS_CSV: &str =
    "scenario,N,seconds,throughput_ops_s,trades,orders\nfast,1000,0.01,100000,50,\n";

/// CSV with a header and no rows: loads, but fails analysis.
pub const HEADER_ONLY_CSV: &str = "scenario,N,seconds,throughput_ops_s,trades,orders\n";
