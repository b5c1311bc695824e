// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health-Seeder CLI
//!
//! Prompts for a user id, a date range, and four sampling ranges, then
//! writes one synthetic metric document per (metric, day) pair to Firestore.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use health_seeder::config::Config;
use health_seeder::db::FirestoreRestClient;
use health_seeder::prompt::collect_plan;
use health_seeder::run_seed;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(report) if report.failed == 0 => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::error!(failed = report.failed, "Run finished with failed writes");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<health_seeder::SeedReport> {
    let config = Config::from_env().context("loading credentials from the environment")?;
    tracing::info!(project = %config.gcp_project_id, "Starting Health-Seeder");

    let client = FirestoreRestClient::new(&config.gcp_project_id, config.firestore_api_key);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let plan =
        collect_plan(&mut stdin.lock(), &mut stdout).context("collecting the seeding plan")?;
    tracing::info!(
        user_id = %plan.user_id,
        start = %plan.start,
        end = %plan.end,
        days = plan.day_count(),
        "Seeding plan collected"
    );

    let mut rng = rand::thread_rng();
    let report = run_seed(&client, &plan, &mut rng, &mut stdout).await?;

    writeln!(
        stdout,
        "\n✅ Seed data upload complete! ({} written, {} failed)",
        report.succeeded, report.failed
    )?;

    Ok(report)
}

/// Human-readable logging to stderr, filterable via RUST_LOG.
/// Defaults to warnings only so prompts and per-write lines stay clean.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
