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

//! Analyzer throughput benchmarks.
//!
//! Runs each analyzer over the bench runner's nine-row output and over a
//! synthetic sweep of 100 scenarios at 30 sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use elobench_core::{analyze_by_order_count, analyze_by_scenario, analyze_scalability, RecordStore};
use elobench_test::fixtures;

fn datasets() -> Vec<(&'static str, RecordStore)> {
    let sizes: Vec<u64> = (1..=30).map(|i| i * 1000).collect();
    vec![
        ("runner", fixtures::bench_runner_store()),
        (
            "synthetic_3000",
            RecordStore::new(fixtures::synthetic_records(100, &sizes)),
        ),
    ]
}

fn bench_analyzers(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzers");

    for (name, store) in datasets() {
        group.throughput(Throughput::Elements(store.len() as u64));

        group.bench_with_input(BenchmarkId::new("by_scenario", name), &store, |b, s| {
            b.iter(|| analyze_by_scenario(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("by_order_count", name), &store, |b, s| {
            b.iter(|| analyze_by_order_count(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("scalability", name), &store, |b, s| {
            b.iter(|| analyze_scalability(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyzers);
criterion_main!(benches);
