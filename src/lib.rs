// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ToGeDoo: children's activities for Norwegian families
//!
//! This crate provides the backend API that searches Ungfritid by
//! municipality, normalizes the results into activity cards, and serves a
//! static per-city catalog.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{CityCatalog, UngfritidClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub ungfritid: UngfritidClient,
    pub city_catalog: CityCatalog,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: Config) -> Self {
        let ungfritid = UngfritidClient::new(config.ungfritid_base_url.clone());
        let city_catalog = CityCatalog::new(&config.city_data_path);
        Self {
            config,
            ungfritid,
            city_catalog,
        }
    }
}
