// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Health-Seeder: generate synthetic daily health metrics and upload them
//! to Cloud Firestore through its public REST API.
//!
//! One document is written per (metric, day) pair, keyed deterministically
//! by metric name and date so repeated runs overwrite rather than duplicate.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prompt;
pub mod sampler;
pub mod seeder;
pub mod time_utils;

pub use seeder::{run_seed, SeedReport};
