// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dataset Query Engine
//!
//! The DatasetEngine is the single entry point for reading the dataset:
//! lookups, filtered listings, value joins, statistics and map data.

pub mod config;
pub mod enrichment;
pub mod geo;
pub mod listing;
pub mod query_engine;
pub mod search;
pub mod statistics;

pub use config::{EngineConfig, CLDF_PATH_ENV};
pub use enrichment::{FeatureValue, LanguageValue};
pub use geo::{FamilyCount, FeatureMap, FeatureMapPoint, GeoLanguage};
pub use listing::{paginate, total_pages, FeatureFilter, LanguageFilter, Listing};
pub use query_engine::DatasetEngine;
pub use search::{SearchCategory, SearchResults};
pub use statistics::{DatasetStatistics, DetailedStatistics, Distribution, UNKNOWN_BUCKET};
