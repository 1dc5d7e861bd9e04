// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod city;

pub use activity::{ActivitiesResponse, NormalizedActivity};
pub use city::{CityListing, StaticActivity};
