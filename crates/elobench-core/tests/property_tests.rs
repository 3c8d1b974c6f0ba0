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

//! Property tests for the analyzers.

use elobench_core::{
    analyze_by_order_count, analyze_by_scenario, analyze_scalability, BenchmarkRecord,
    RecordStore,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = BenchmarkRecord> {
    (
        prop::sample::select(vec!["same_price", "spread", "crossing", "Spread"]),
        prop::sample::select(vec![1000u64, 10_000, 50_000]),
        1.0e-6f64..10.0,
        1.0f64..5.0e6,
        1u64..100_000,
    )
        .prop_flat_map(|(scenario, n, seconds, throughput, orders)| {
            (0..=orders).prop_map(move |trades| {
                BenchmarkRecord::new(scenario, n, seconds, throughput, trades, orders)
            })
        })
}

fn arb_store() -> impl Strategy<Value = RecordStore> {
    prop::collection::vec(arb_record(), 1..40).prop_map(RecordStore::new)
}

proptest! {
    #[test]
    fn prop_stats_ordering(store in arb_store()) {
        for summary in analyze_by_scenario(&store).unwrap() {
            let stats = summary.stats;
            prop_assert!(stats.min <= stats.mean);
            prop_assert!(stats.mean <= stats.max);
            prop_assert_eq!(stats.std_dev.is_none(), stats.count == 1);
        }
    }

    #[test]
    fn prop_trade_ratio_bounds(store in arb_store()) {
        for summary in analyze_by_scenario(&store).unwrap() {
            for row in summary.rows {
                prop_assert!((0.0..=100.0).contains(&row.trade_ratio));
            }
        }
    }

    #[test]
    fn prop_best_scenario_is_first_maximum(store in arb_store()) {
        let trials = store.trials().unwrap();

        for bucket in analyze_by_order_count(&store).unwrap() {
            let in_bucket: Vec<_> = trials
                .iter()
                .filter(|t| t.order_count == bucket.order_count)
                .collect();
            let max = in_bucket.iter().map(|t| t.throughput).fold(f64::MIN, f64::max);
            let first_max = in_bucket.iter().find(|t| t.throughput == max).unwrap();

            prop_assert_eq!(bucket.best.throughput, max);
            prop_assert_eq!(bucket.best.scenario.as_str(), first_max.scenario);
        }
    }

    #[test]
    fn prop_groups_partition_store(store in arb_store()) {
        let by_scenario: usize = analyze_by_scenario(&store)
            .unwrap()
            .iter()
            .map(|s| s.rows.len())
            .sum();
        let by_count: usize = analyze_by_order_count(&store)
            .unwrap()
            .iter()
            .map(|s| s.rows.len())
            .sum();
        let by_profile: usize = analyze_scalability(&store)
            .unwrap()
            .iter()
            .map(|p| p.rows.len())
            .sum();

        prop_assert_eq!(by_scenario, store.len());
        prop_assert_eq!(by_count, store.len());
        prop_assert_eq!(by_profile, store.len());
    }

    #[test]
    fn prop_scaling_uses_extremes(store in arb_store()) {
        for profile in analyze_scalability(&store).unwrap() {
            let first = profile.rows.first().unwrap();
            let last = profile.rows.last().unwrap();
            prop_assert!(profile.rows.windows(2).all(|w| w[0].order_count <= w[1].order_count));

            match profile.scaling {
                Some(scaling) => {
                    prop_assert!(first.order_count < last.order_count);
                    prop_assert_eq!(scaling.factor, last.throughput / first.throughput);
                }
                None => prop_assert_eq!(first.order_count, last.order_count),
            }
        }
    }
}
