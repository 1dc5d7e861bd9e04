// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity search routes.

use crate::error::{AppError, Result};
use crate::models::{ActivitiesResponse, CityListing};
use crate::time_utils::format_utc_rfc3339_millis;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_MUNICIPALITY: &str = "Oslo";
const DEFAULT_LIMIT: u32 = 50;

/// Activity routes (public).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/activities", get(get_activities).post(post_activities))
}

// ─── Query-string search ─────────────────────────────────────

/// Query parameters, read leniently so bad input falls back to defaults.
#[derive(Debug, Default, PartialEq)]
struct ActivitiesQuery {
    municipality: Option<String>,
    limit: Option<String>,
    /// Static catalog key, used only when `municipality` is absent
    city: Option<String>,
}

impl ActivitiesQuery {
    /// First value wins when a key repeats; unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "municipality" => &mut query.municipality,
                "limit" => &mut query.limit,
                "city" => &mut query.city,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

fn parse_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|l| l.trim().parse().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

/// `GET /api/activities`
///
/// `?municipality=&limit=` searches Ungfritid; `?city=` alone reads the
/// static catalog.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let params = ActivitiesQuery::from_pairs(pairs);
    if let (None, Some(city)) = (&params.municipality, &params.city) {
        return Ok(Json(find_city(&state, city).await?).into_response());
    }

    let municipality = params
        .municipality
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MUNICIPALITY.to_string());
    let limit = parse_limit(params.limit.as_deref());

    Ok(Json(search(&state, municipality, limit).await?).into_response())
}

async fn find_city(state: &AppState, city: &str) -> Result<CityListing> {
    state
        .city_catalog
        .find(city)
        .await?
        .ok_or_else(|| AppError::CityNotFound(city.to_string()))
}

// ─── JSON body search ────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesRequest {
    /// Missing → default; explicit `null` → rejected
    #[serde(default = "default_municipality")]
    municipality: Option<String>,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_municipality() -> Option<String> {
    Some(DEFAULT_MUNICIPALITY.to_string())
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// `POST /api/activities` with `{municipality?, limit?}`.
async fn post_activities(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ActivitiesResponse>> {
    let request: ActivitiesRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected activities request body");
        AppError::BadRequest("Invalid request body".to_string())
    })?;

    let municipality = request
        .municipality
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest("Municipality parameter is required".to_string()))?;

    Ok(Json(search(&state, municipality, request.limit).await?))
}

// ─── Shared ──────────────────────────────────────────────────

async fn search(state: &AppState, municipality: String, limit: u32) -> Result<ActivitiesResponse> {
    let data = state.ungfritid.search(&municipality, limit).await?;
    Ok(ActivitiesResponse::new(
        data,
        municipality,
        format_utc_rfc3339_millis(chrono::Utc::now()),
    ))
}
