// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static city catalog lookup.
//!
//! The catalog file is re-read on every lookup so edits show up without a
//! restart.

use crate::models::city::{CityCatalogFile, CityListing};
use std::path::{Path, PathBuf};

/// Reads curated activities from a city-keyed JSON file.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    path: PathBuf,
}

impl CityCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load and parse the whole catalog.
    pub async fn load(&self) -> Result<CityCatalogFile, CatalogError> {
        let json_data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::parse(&json_data)
    }

    /// Parse catalog JSON.
    pub fn parse(json_data: &str) -> Result<CityCatalogFile, CatalogError> {
        serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    /// Look up one city by its exact key. `Ok(None)` when the key is absent.
    pub async fn find(&self, city: &str) -> Result<Option<CityListing>, CatalogError> {
        let mut catalog = self.load().await?;
        let listing = catalog.remove(city);
        tracing::debug!(
            city,
            found = listing.is_some(),
            path = %self.path.display(),
            "City catalog lookup"
        );
        Ok(listing)
    }
}

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),
}
