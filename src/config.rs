// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credentials loaded from environment variables.
//!
//! The Firestore project id and Web API key are deliberately never compiled
//! into the binary; they are read once at startup.

use std::env;

/// Firestore credentials, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project id hosting the Firestore database
    pub gcp_project_id: String,
    /// Firestore Web API key, passed as the `key` query parameter
    pub firestore_api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            firestore_api_key: env::var("FIRESTORE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FIRESTORE_API_KEY"))?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            firestore_api_key: "test_api_key".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
