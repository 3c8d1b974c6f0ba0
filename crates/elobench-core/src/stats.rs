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

//! Descriptive statistics over throughput samples.

/// Summary of a group's throughput values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThroughputStats {
    /// Number of samples.
    pub count: usize,
    /// Smallest throughput.
    pub min: f64,
    /// Largest throughput.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (divisor `count - 1`).
    ///
    /// `None` for a single sample, where it is undefined.
    pub std_dev: Option<f64>,
}

impl ThroughputStats {
    /// Computes statistics over `values`. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        // Rounding in the sum can push the mean a few ulps past an extreme.
        let mean = mean(values)?.clamp(min, max);

        Some(Self {
            count: values.len(),
            min,
            max,
            mean,
            std_dev: sample_std_dev(values),
        })
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation, or `None` with fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let stats = ThroughputStats::from_values(&[100.0, 300.0, 200.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.std_dev, Some(100.0));
    }

    #[test]
    fn test_single_value_has_no_std_dev() {
        let stats = ThroughputStats::from_values(&[50_000.0]).unwrap();
        assert_eq!(stats.mean, 50_000.0);
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn test_equal_values_zero_std_dev() {
        let stats = ThroughputStats::from_values(&[100_000.0, 100_000.0]).unwrap();
        assert_eq!(stats.std_dev, Some(0.0));
    }

    #[test]
    fn test_empty() {
        assert!(ThroughputStats::from_values(&[]).is_none());
        assert!(mean(&[]).is_none());
        assert!(sample_std_dev(&[1.0]).is_none());
    }

    #[test]
    fn test_mean_stays_within_bounds() {
        let values = [0.1, 0.1, 0.1];
        let stats = ThroughputStats::from_values(&values).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }
}
