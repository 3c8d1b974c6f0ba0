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

//! Analyzers over a [`RecordStore`](crate::RecordStore).
//!
//! # Modules
//!
//! - `scenario`: rows and throughput statistics per scenario
//! - `order_count`: rows and best scenario per input size
//! - `scalability`: efficiency and scaling factor per scenario
//!
//! Groups are enumerated through a `BTreeMap`, so scenarios come out in
//! lexicographic order and order counts in ascending numeric order. Within a
//! group, trials keep load order until an analyzer applies its stable sort.

pub mod order_count;
pub mod scalability;
pub mod scenario;

use crate::record::Trial;
use std::collections::BTreeMap;

/// Partitions trials by `key`, preserving load order inside each group.
pub(crate) fn group_by<'a, K, F>(trials: &[Trial<'a>], key: F) -> BTreeMap<K, Vec<Trial<'a>>>
where
    K: Ord,
    F: Fn(&Trial<'a>) -> K,
{
    let mut grouped: BTreeMap<K, Vec<Trial<'a>>> = BTreeMap::new();

    for trial in trials {
        grouped.entry(key(trial)).or_default().push(*trial);
    }

    grouped
}
