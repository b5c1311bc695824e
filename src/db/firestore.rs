// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore REST client for idempotent daily-metric writes.
//!
//! Documents live at `userData/{user_id}/{metric}/{date}`; because the
//! document id is derived from metric and date, a PUT is create-or-replace
//! and re-running the seeder overwrites rather than duplicates.

use chrono::NaiveDate;
use serde::Serialize;

use crate::db::collections;
use crate::error::AppError;
use crate::models::Metric;
use crate::time_utils::midnight_utc_rfc3339;

/// Firestore REST API client.
#[derive(Clone)]
pub struct FirestoreRestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Firestore document body: `{"fields": {...}}`.
#[derive(Debug, Serialize)]
struct MetricDocument {
    fields: MetricFields,
}

#[derive(Debug, Serialize)]
struct MetricFields {
    value: DoubleValue,
    timestamp: TimestampValue,
}

#[derive(Debug, Serialize)]
struct DoubleValue {
    #[serde(rename = "doubleValue")]
    double_value: f64,
}

#[derive(Debug, Serialize)]
struct TimestampValue {
    #[serde(rename = "timestampValue")]
    timestamp_value: String,
}

impl FirestoreRestClient {
    /// Create a client for the given project, targeting the public
    /// `firestore.googleapis.com` endpoint and the `(default)` database.
    pub fn new(project_id: &str, api_key: String) -> Self {
        let base_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            project_id
        );
        Self::with_base_url(base_url, api_key)
    }

    /// Create a client against an explicit documents base URL. Used by tests
    /// to point at a local server.
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Relative document path for a (user, metric, date) triple.
    ///
    /// Deterministic in its inputs; the value being written never affects
    /// the path. The user id is percent-encoded since it is free text.
    pub fn document_path(user_id: &str, metric: Metric, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}",
            collections::USER_DATA,
            urlencoding::encode(user_id),
            metric.name(),
            date.format("%Y-%m-%d")
        )
    }

    /// Write one daily metric value as a create-or-replace PUT.
    ///
    /// The timestamp field is the date at midnight UTC. Statuses 200 and 201
    /// are success; any other status surfaces the response body verbatim.
    pub async fn put_daily_metric(
        &self,
        user_id: &str,
        metric: Metric,
        date: NaiveDate,
        value: f64,
    ) -> Result<(), AppError> {
        let url = format!(
            "{}/{}",
            self.base_url,
            Self::document_path(user_id, metric, date)
        );

        let document = MetricDocument {
            fields: MetricFields {
                value: DoubleValue {
                    double_value: value,
                },
                timestamp: TimestampValue {
                    timestamp_value: midnight_utc_rfc3339(date),
                },
            },
        };

        let response = self
            .http
            .put(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&document)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 200 || status == 201 {
            tracing::debug!(%metric, %date, "Document written");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Firestore { status, body })
    }
}
