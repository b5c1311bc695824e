// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Uniform sampling of daily metric values.
//!
//! The generator is an explicit parameter; there is no hidden global RNG
//! state, and tests pass a seeded generator for reproducibility.

use rand::Rng;

use crate::models::{DailySample, MetricRange, SampleRanges};

/// Sample one day's worth of metric values.
///
/// Steps are a uniform integer in the inclusive range; water, sleep, and
/// weight are uniform floats rounded to one decimal place.
pub fn sample_day<R: Rng>(ranges: &SampleRanges, rng: &mut R) -> DailySample {
    DailySample {
        steps: rng.gen_range(ranges.steps.min()..=ranges.steps.max()),
        water: sample_rounded(&ranges.water, rng),
        sleep: sample_rounded(&ranges.sleep, rng),
        weight: sample_rounded(&ranges.weight, rng),
    }
}

fn sample_rounded<R: Rng>(range: &MetricRange<f64>, rng: &mut R) -> f64 {
    round_one_decimal(rng.gen_range(range.min()..=range.max()))
}

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
