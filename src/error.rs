// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
///
/// Input and configuration errors are fatal; `Firestore` and `Http` errors
/// are recovered per-write by the seeding loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Firestore rejected the write (HTTP {status}):\n{body}")]
    Firestore { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors the seeding loop reports and skips rather than
    /// aborting the run.
    pub fn is_write_error(&self) -> bool {
        matches!(self, AppError::Firestore { .. } | AppError::Http(_))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
