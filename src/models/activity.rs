// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ToGeDoo activity shape served to the frontend.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One activity card, flattened from an Ungfritid record.
///
/// Every field is always populated; missing upstream data is replaced by a
/// fixed default during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NormalizedActivity {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human readable, e.g. "5-10 år"
    pub age_group: String,
    pub location: String,
    /// Absolute URL or site-relative path
    pub image: String,
    pub category: String,
    /// Human readable, e.g. "150 kr" or "Gratis"
    pub price: String,
    pub when: String,
    pub municipality: String,
}

/// Success envelope for `/api/activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub success: bool,
    pub data: Vec<NormalizedActivity>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub count: usize,
    pub municipality: String,
    /// RFC3339 UTC, millisecond precision
    pub timestamp: String,
}

impl ActivitiesResponse {
    /// Wrap a normalized list in a success envelope.
    pub fn new(data: Vec<NormalizedActivity>, municipality: String, timestamp: String) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            municipality,
            timestamp,
        }
    }
}
