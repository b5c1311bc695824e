// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Metric enumeration, sampling ranges, and per-day samples.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The fixed set of daily health metrics.
///
/// Iteration order (and therefore write order) is fixed: steps, water,
/// sleep, weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Steps,
    Water,
    Sleep,
    Weight,
}

impl Metric {
    /// All metrics in write order.
    pub const ALL: [Metric; 4] = [Metric::Steps, Metric::Water, Metric::Sleep, Metric::Weight];

    /// Wire name, used as the Firestore sub-collection name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Water => "water",
            Metric::Sleep => "sleep",
            Metric::Weight => "weight",
        }
    }

    /// Capitalized name for console output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Steps => "Steps",
            Metric::Water => "Water",
            Metric::Sleep => "Sleep",
            Metric::Weight => "Weight",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive sampling range with `min <= max` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy + fmt::Display> MetricRange<T> {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, AppError> {
        if min > max {
            return Err(AppError::InvalidInput(format!(
                "range minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

impl<T> MetricRange<T>
where
    T: FromStr + PartialOrd + Copy + fmt::Display,
{
    /// Parse a range from a `"min max"` line (exactly two whitespace-separated
    /// numbers).
    pub fn parse(line: &str, what: &str) -> Result<Self, AppError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [min, max] = tokens.as_slice() else {
            return Err(AppError::InvalidInput(format!(
                "{} range must be two whitespace-separated numbers, got {:?}",
                what, line
            )));
        };

        let min = min.parse::<T>().map_err(|_| {
            AppError::InvalidInput(format!("{} range minimum {:?} is not a number", what, min))
        })?;
        let max = max.parse::<T>().map_err(|_| {
            AppError::InvalidInput(format!("{} range maximum {:?} is not a number", what, max))
        })?;

        Self::new(min, max)
    }
}

/// The four configured sampling ranges.
#[derive(Debug, Clone, Copy)]
pub struct SampleRanges {
    pub steps: MetricRange<u32>,
    pub water: MetricRange<f64>,
    pub sleep: MetricRange<f64>,
    pub weight: MetricRange<f64>,
}

/// One day's worth of sampled values.
#[derive(Debug, Clone, Copy)]
pub struct DailySample {
    pub steps: u32,
    pub water: f64,
    pub sleep: f64,
    pub weight: f64,
}

impl DailySample {
    /// The value written for a given metric. Firestore stores every value as
    /// a double, so steps are widened here.
    pub fn value_for(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Steps => f64::from(self.steps),
            Metric::Water => self.water,
            Metric::Sleep => self.sleep,
            Metric::Weight => self.weight,
        }
    }
}
