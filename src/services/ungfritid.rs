// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ungfritid activity search client.
//!
//! Handles:
//! - Mapping municipality names to Ungfritid place names
//! - The single `findactivities` GET and its status/JSON checks
//! - Locating and normalizing the returned records

use crate::models::NormalizedActivity;
use crate::services::normalize::{locate_activities, normalize_activity};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

/// Identifies us to Ungfritid.
pub const CLIENT_USER_AGENT: &str = "ToGeDoo/1.0 (Rust)";

/// Area scope sent with every search.
const AREA_SCOPE: &str = "municipality";

/// Characters of an error body kept in logs.
const ERROR_BODY_LOG_CHARS: usize = 200;

/// Lowercase municipality key → Ungfritid place name.
const MUNICIPALITY_PLACES: &[(&str, &str)] = &[
    ("oslo", "Oslo"),
    ("bergen", "Bergen"),
    ("trondheim", "Trondheim"),
    ("stavanger", "Stavanger"),
    ("kristiansand", "Kristiansand"),
    ("tromso", "Tromsø"),
];

/// Resolve a user-supplied municipality to the place name Ungfritid expects.
///
/// Lookup is case-insensitive; unknown names pass through unchanged.
pub fn resolve_place(municipality: &str) -> String {
    let key = municipality.to_lowercase();
    MUNICIPALITY_PLACES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, place)| place.to_string())
        .unwrap_or_else(|| municipality.to_string())
}

/// Query parameters for a `findactivities` call, in wire order.
pub fn build_query(municipality: &str, limit: u32) -> Vec<(&'static str, String)> {
    vec![
        ("area", AREA_SCOPE.to_string()),
        ("place", resolve_place(municipality)),
        ("maxActivities", limit.to_string()),
    ]
}

/// Ungfritid API client.
#[derive(Clone)]
pub struct UngfritidClient {
    http: reqwest::Client,
    base_url: String,
}

impl UngfritidClient {
    /// Create a client for the given `findactivities` endpoint URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw search payload for a municipality.
    pub async fn find_activities(
        &self,
        municipality: &str,
        limit: u32,
    ) -> Result<Value, UngfritidError> {
        let query = build_query(municipality, limit);
        tracing::debug!(url = %self.base_url, ?query, "Querying Ungfritid");

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_LOG_CHARS).collect();
            tracing::warn!(status = status.as_u16(), body = %snippet, "Ungfritid returned error status");
            return Err(UngfritidError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Search, locate and normalize up to `limit` activities.
    pub async fn search(
        &self,
        municipality: &str,
        limit: u32,
    ) -> Result<Vec<NormalizedActivity>, UngfritidError> {
        tracing::info!(municipality, limit, "Fetching activities from Ungfritid");

        let payload = self.find_activities(municipality, limit).await?;
        let records = locate_activities(&payload);
        tracing::debug!(found = records.len(), "Located Ungfritid records");

        let activities: Vec<NormalizedActivity> = records
            .iter()
            .take(limit as usize)
            .map(|record| normalize_activity(record, municipality))
            .collect();

        tracing::info!(
            municipality,
            count = activities.len(),
            "Transformed Ungfritid activities"
        );
        Ok(activities)
    }
}

/// Errors from the Ungfritid API.
#[derive(Debug, thiserror::Error)]
pub enum UngfritidError {
    #[error("Ungfritid request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Ungfritid API returned {status}")]
    Status { status: u16 },

    #[error("Ungfritid returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_place_known_municipalities() {
        assert_eq!(resolve_place("oslo"), "Oslo");
        assert_eq!(resolve_place("TROMSO"), "Tromsø");
        assert_eq!(resolve_place("Kristiansand"), "Kristiansand");
    }

    #[test]
    fn test_resolve_place_passes_unknown_through() {
        assert_eq!(resolve_place("Lillehammer"), "Lillehammer");
        assert_eq!(resolve_place("bodø"), "bodø");
    }

    #[test]
    fn test_build_query_order_and_values() {
        let query = build_query("tromso", 12);
        assert_eq!(
            query,
            vec![
                ("area", "municipality".to_string()),
                ("place", "Tromsø".to_string()),
                ("maxActivities", "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_error_mentions_code() {
        let err = UngfritidError::Status { status: 503 };
        assert_eq!(err.to_string(), "Ungfritid API returned 503");
    }
}
