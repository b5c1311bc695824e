// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! The seeding plan captured from the operator.

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::SampleRanges;

/// Everything the seeding loop needs, captured once at startup and immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    /// Target user document id (free text)
    pub user_id: String,
    /// First day to seed (inclusive)
    pub start: NaiveDate,
    /// Last day to seed (inclusive)
    pub end: NaiveDate,
    /// Sampling bounds for each metric
    pub ranges: SampleRanges,
}

impl SeedPlan {
    /// Build a plan, rejecting `start > end`.
    pub fn new(
        user_id: String,
        start: NaiveDate,
        end: NaiveDate,
        ranges: SampleRanges,
    ) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self {
            user_id,
            start,
            end,
            ranges,
        })
    }

    /// Number of days in the inclusive range.
    pub fn day_count(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }
}
