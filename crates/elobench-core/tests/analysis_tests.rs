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

//! End-to-end checks for the three analyzers over shared fixtures.

use elobench_core::{
    analyze_by_order_count, analyze_by_scenario, analyze_scalability, AnalysisError,
    BenchmarkRecord, Field, RecordStore,
};
use elobench_test::fixtures::{self, builders::RecordBuilder};

// ===== Scenario analysis =====

#[test]
fn test_scenario_e2e_groups() {
    let summaries = analyze_by_scenario(&fixtures::e2e_store()).unwrap();

    let groups: Vec<_> = summaries
        .iter()
        .map(|s| (s.scenario.as_str(), s.rows.len()))
        .collect();
    assert_eq!(groups, [("fast", 2), ("slow", 1)]);
}

#[test]
fn test_scenario_e2e_statistics() {
    let summaries = analyze_by_scenario(&fixtures::e2e_store()).unwrap();

    let fast = &summaries[0].stats;
    assert_eq!(fast.mean, 100_000.0);
    assert_eq!(fast.std_dev, Some(0.0));

    let slow = &summaries[1].stats;
    assert_eq!(slow.count, 1);
    assert_eq!(slow.std_dev, None);
}

#[test]
fn test_scenario_e2e_trade_ratios() {
    let summaries = analyze_by_scenario(&fixtures::e2e_store()).unwrap();
    let ratios: Vec<_> = summaries[0].rows.iter().map(|r| r.trade_ratio).collect();
    assert_eq!(ratios, [50.0, 50.0]);
    assert_eq!(summaries[1].rows[0].trade_ratio, 10.0);
}

#[test]
fn test_scenario_runner_dataset() {
    let summaries = analyze_by_scenario(&fixtures::bench_runner_store()).unwrap();
    let names: Vec<_> = summaries.iter().map(|s| s.scenario.as_str()).collect();
    assert_eq!(names, ["crossing", "same_price", "spread"]);

    for summary in &summaries {
        let counts: Vec<_> = summary.rows.iter().map(|r| r.order_count).collect();
        assert_eq!(counts, fixtures::RUNNER_SIZES);
        assert!(summary.stats.std_dev.is_some());
    }
}

// ===== Order-count analysis =====

#[test]
fn test_order_count_e2e_best() {
    let buckets = analyze_by_order_count(&fixtures::e2e_store()).unwrap();
    assert_eq!(buckets.len(), 2);

    let n1000 = &buckets[0];
    assert_eq!(n1000.order_count, 1000);
    assert_eq!(n1000.best.scenario, "fast");
    assert_eq!(n1000.best.throughput, 100_000.0);

    let n50k = &buckets[1];
    assert_eq!(n50k.order_count, 50_000);
    assert_eq!(n50k.rows.len(), 1);
    assert_eq!(n50k.best.scenario, "fast");
}

#[test]
fn test_order_count_runner_dataset_best_is_max() {
    for bucket in analyze_by_order_count(&fixtures::bench_runner_store()).unwrap() {
        let max = bucket
            .rows
            .iter()
            .map(|r| r.throughput)
            .fold(f64::MIN, f64::max);
        assert_eq!(bucket.best.throughput, max);
        assert_eq!(bucket.best.scenario, "same_price");
    }
}

// ===== Scalability analysis =====

#[test]
fn test_scaling_factor_exactly_eight() {
    let store = RecordStore::new(vec![
        RecordBuilder::new("spread")
            .order_count(1000)
            .throughput(10_000.0)
            .build(),
        RecordBuilder::new("spread")
            .order_count(50_000)
            .throughput(80_000.0)
            .build(),
    ]);

    let profiles = analyze_scalability(&store).unwrap();
    assert_eq!(profiles[0].scaling.unwrap().factor, 8.0);
}

#[test]
fn test_scalability_e2e() {
    let profiles = analyze_scalability(&fixtures::e2e_store()).unwrap();

    let fast = &profiles[0];
    assert_eq!(fast.scenario, "fast");
    assert_eq!(fast.scaling.unwrap().factor, 1.0);
    assert_eq!(fast.rows[0].efficiency, 100.0);
    assert_eq!(fast.rows[1].efficiency, 2.0);

    let slow = &profiles[1];
    assert_eq!(slow.scenario, "slow");
    assert!(slow.scaling.is_none());
}

// ===== Error handling =====

#[test]
fn test_empty_store_rejected_by_all_analyzers() {
    let store = RecordStore::default();
    assert_eq!(
        analyze_by_scenario(&store).unwrap_err(),
        AnalysisError::EmptyDataset
    );
    assert_eq!(
        analyze_by_order_count(&store).unwrap_err(),
        AnalysisError::EmptyDataset
    );
    assert_eq!(
        analyze_scalability(&store).unwrap_err(),
        AnalysisError::EmptyDataset
    );
}

#[test]
fn test_missing_field_rejected_by_all_analyzers() {
    let mut records = fixtures::e2e_records();
    records.push(RecordBuilder::new("late").without_throughput().build());
    let store = RecordStore::new(records);

    let expected = AnalysisError::MissingField {
        row: 4,
        field: Field::Throughput,
    };
    assert_eq!(analyze_by_scenario(&store).unwrap_err(), expected);
    assert_eq!(analyze_by_order_count(&store).unwrap_err(), expected);
    assert_eq!(analyze_scalability(&store).unwrap_err(), expected);
}

#[test]
fn test_missing_scenario_reported() {
    let store = RecordStore::new(vec![RecordBuilder::new("x").without_scenario().build()]);
    assert_eq!(
        analyze_by_scenario(&store).unwrap_err(),
        AnalysisError::MissingField {
            row: 1,
            field: Field::Scenario
        }
    );
}

#[test]
fn test_trades_above_orders_surfaced() {
    let store = RecordStore::new(vec![BenchmarkRecord::new(
        "anomaly", 1000, 0.01, 1.0, 150, 100,
    )]);
    let summaries = analyze_by_scenario(&store).unwrap();
    assert_eq!(summaries[0].rows[0].trade_ratio, 150.0);
}

#[test]
fn test_analysis_is_repeatable() {
    let store = fixtures::bench_runner_store();
    assert_eq!(
        analyze_by_scenario(&store).unwrap(),
        analyze_by_scenario(&store).unwrap()
    );
    assert_eq!(
        analyze_by_order_count(&store).unwrap(),
        analyze_by_order_count(&store).unwrap()
    );
    assert_eq!(
        analyze_scalability(&store).unwrap(),
        analyze_scalability(&store).unwrap()
    );
}
