// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Engine configuration

use crate::dataset::{DatasetError, DatasetResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the CLDF directory
pub const CLDF_PATH_ENV: &str = "WALS_CLDF_PATH";

/// Query engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding the CLDF CSV files
    pub cldf_path: PathBuf,

    /// Default page size for language listings
    pub languages_per_page: usize,

    /// Default page size for feature listings
    pub features_per_page: usize,

    /// Maximum number of hits returned by a search
    pub search_limit: usize,

    /// Number of entries kept in `top_families`
    pub top_families_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cldf_path: PathBuf::from("cldf"),
            languages_per_page: 50,
            features_per_page: 30,
            search_limit: 50,
            top_families_limit: 20,
        }
    }
}

impl EngineConfig {
    /// Default configuration reading from `path`
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            cldf_path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_page_sizes(mut self, languages: usize, features: usize) -> Self {
        self.languages_per_page = languages;
        self.features_per_page = features;
        self
    }

    pub fn with_top_families_limit(mut self, limit: usize) -> Self {
        self.top_families_limit = limit;
        self
    }

    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> DatasetResult<()> {
        if self.languages_per_page == 0 || self.features_per_page == 0 {
            return Err(DatasetError::InvalidConfig(
                "page sizes must be greater than 0".to_string(),
            ));
        }

        if self.search_limit == 0 {
            return Err(DatasetError::InvalidConfig(
                "search_limit must be greater than 0".to_string(),
            ));
        }

        if self.top_families_limit == 0 {
            return Err(DatasetError::InvalidConfig(
                "top_families_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
