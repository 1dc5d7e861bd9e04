// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ungfritid payload location and record normalization.
//!
//! Ungfritid records are loosely shaped: almost every field is optional and
//! many are nested. Each output field is an explicit optional chain that ends
//! in a fixed default, so a record can never fail to normalize.

use crate::models::NormalizedActivity;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Aktivitet";
pub const DEFAULT_CATEGORY: &str = "Aktivitet";
pub const DEFAULT_AGE_GROUP: &str = "Alle aldre";
pub const DEFAULT_PRICE: &str = "Gratis";
pub const DEFAULT_WHEN: &str = "Kommende";
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-activity.png";

/// One place an activity list may live in a search payload.
type Locator = fn(&Value) -> Option<&Vec<Value>>;

/// Candidate list locations, highest priority first.
const LOCATORS: [Locator; 3] = [activities_hits, top_level_list, data_list];

fn activities_hits(payload: &Value) -> Option<&Vec<Value>> {
    payload.pointer("/activities/hits")?.as_array()
}

fn top_level_list(payload: &Value) -> Option<&Vec<Value>> {
    payload.as_array()
}

fn data_list(payload: &Value) -> Option<&Vec<Value>> {
    payload.get("data")?.as_array()
}

/// Find the activity records in a search payload.
///
/// A payload with no recognizable list yields no records.
pub fn locate_activities(payload: &Value) -> &[Value] {
    LOCATORS
        .iter()
        .find_map(|locate| locate(payload))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Flatten one Ungfritid record.
pub fn normalize_activity(record: &Value, municipality: &str) -> NormalizedActivity {
    let slug = text_at(record, "/slug");

    let id = text_at(record, "/_id")
        .or_else(|| slug.clone())
        .unwrap_or_else(fallback_id);

    let title = slug
        .map(|s| s.replace('-', " "))
        .or_else(|| text_at(record, "/basicInfo/activityTitle"))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = text_at(record, "/moreAboutActivity/shortDescription")
        .or_else(|| text_at(record, "/basicInfo/activityDescription"))
        .unwrap_or_default();

    let age_group = age_range(record, "/activityFor/age")
        .or_else(|| age_range(record, "/ageGroup"))
        .unwrap_or_else(|| DEFAULT_AGE_GROUP.to_string());

    let location = text_at(record, "/contactPositions/0/position/description")
        .unwrap_or_else(|| municipality.to_string());

    let image = text_at(record, "/basicInfo/image")
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let category = text_at(record, "/tags/0").unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let price = text_at(record, "/necessaryEquipment/prices/0/price")
        .map(|p| format!("{p} kr"))
        .unwrap_or_else(|| DEFAULT_PRICE.to_string());

    let when = text_at(record, "/basicInfo/when").unwrap_or_else(|| DEFAULT_WHEN.to_string());

    NormalizedActivity {
        id,
        title,
        description,
        age_group,
        location,
        image,
        category,
        price,
        when,
        municipality: municipality.to_string(),
    }
}

/// `"{from}-{to} år"` from the first range of the array at `pointer`.
fn age_range(record: &Value, pointer: &str) -> Option<String> {
    let first = record.pointer(pointer)?.as_array()?.first()?;
    let from = scalar_text(first.get("from")?)?;
    let to = scalar_text(first.get("to")?)?;
    Some(format!("{from}-{to} år"))
}

/// Non-empty text at `pointer`, rendering numbers as text.
fn text_at(record: &Value, pointer: &str) -> Option<String> {
    record.pointer(pointer).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        _ => None,
    }
}

/// Id for records that carry neither `_id` nor `slug`; not stable across requests.
fn fallback_id() -> String {
    format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}
