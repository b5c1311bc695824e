// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The seeding loop: sample, write, report.

use std::io::Write;

use rand::Rng;

use crate::db::FirestoreRestClient;
use crate::error::{AppError, Result};
use crate::models::{Metric, SeedPlan};
use crate::sampler::sample_day;
use crate::time_utils::days_inclusive;

/// Outcome counts for one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl SeedReport {
    fn record(&mut self, ok: bool) {
        self.attempted += 1;
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Run the plan: for every day in the inclusive range, sample all four
/// metrics and write each one, sequentially and in fixed metric order.
///
/// A failed write is reported on `out` and skipped; the loop always
/// continues. Only I/O errors on `out` itself abort the run.
pub async fn run_seed<R, W>(
    client: &FirestoreRestClient,
    plan: &SeedPlan,
    rng: &mut R,
    out: &mut W,
) -> Result<SeedReport>
where
    R: Rng,
    W: Write,
{
    let mut report = SeedReport::default();

    for date in days_inclusive(plan.start, plan.end) {
        let sample = sample_day(&plan.ranges, rng);

        for metric in Metric::ALL {
            let value = sample.value_for(metric);

            match client
                .put_daily_metric(&plan.user_id, metric, date, value)
                .await
            {
                Ok(()) => {
                    report.record(true);
                    writeln!(out, "[✓] {} - {}", metric.display_name(), date)?;
                }
                Err(e) if e.is_write_error() => {
                    report.record(false);
                    tracing::warn!(%metric, %date, error = %e, "Write failed, continuing");
                    writeln!(
                        out,
                        "[!] Failed to insert {} on {}:\n{}",
                        metric,
                        date,
                        failure_detail(&e)
                    )?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    tracing::info!(
        attempted = report.attempted,
        failed = report.failed,
        "Seeding run finished"
    );
    Ok(report)
}

/// The response body for Firestore rejections (surfaced verbatim), or the
/// client error message for transport failures.
fn failure_detail(error: &AppError) -> String {
    match error {
        AppError::Firestore { body, .. } if !body.is_empty() => body.clone(),
        other => other.to_string(),
    }
}
