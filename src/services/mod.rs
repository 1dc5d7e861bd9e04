// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod normalize;
pub mod ungfritid;

pub use catalog::{CatalogError, CityCatalog};
pub use normalize::{locate_activities, normalize_activity};
pub use ungfritid::{UngfritidClient, UngfritidError};
