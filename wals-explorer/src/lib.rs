// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! WALS Explorer - A read-only query engine over the WALS CLDF dataset
//!
//! Loads the CLDF tables of the World Atlas of Language Structures once and
//! answers the queries a browsing front end needs.
//!
//! # Features
//!
//! - **Typed CLDF records**: languages, features, codes, values and chapters
//! - **Fallback sample**: a small built-in dataset when no CLDF directory exists
//! - **Listings**: text search, family and macroarea filters, pagination
//! - **Joins**: values annotated with feature, language and code names
//! - **Statistics**: family and macroarea distributions, feature value counts
//! - **Maps**: languages with coordinates and per-feature geographic distributions
//!
//! # Usage
//!
//! ```no_run
//! use wals_explorer::{DatasetEngine, LanguageFilter};
//!
//! let engine = DatasetEngine::initialize("./cldf");
//! let page = engine.get_languages(&LanguageFilter::new(1, 50).with_family("Indo-European"));
//! for language in page.items {
//!     println!("{} ({})", language.name, language.id);
//! }
//! ```

pub mod dataset;
pub mod engine;

pub use dataset::{
    Chapter, CldfLoader, Code, Dataset, DatasetError, DatasetResult, Feature, Language, Tables,
    Value,
};
pub use engine::{
    DatasetEngine, DatasetStatistics, DetailedStatistics, Distribution, EngineConfig,
    FamilyCount, FeatureFilter, FeatureMap, FeatureMapPoint, FeatureValue, GeoLanguage,
    LanguageFilter, LanguageValue, Listing, SearchCategory, SearchResults, UNKNOWN_BUCKET,
};

/// WALS Explorer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WALS Explorer crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
