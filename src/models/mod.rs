// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the seeder.

pub mod metric;
pub mod plan;

pub use metric::{DailySample, Metric, MetricRange, SampleRanges};
pub use plan::SeedPlan;
