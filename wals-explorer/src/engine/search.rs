// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Free-text search across languages and features

use super::query_engine::DatasetEngine;
use crate::dataset::{DatasetError, Feature, Language};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which tables a global search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    #[default]
    All,
    Languages,
    Features,
}

impl SearchCategory {
    pub fn includes_languages(&self) -> bool {
        matches!(self, SearchCategory::All | SearchCategory::Languages)
    }

    pub fn includes_features(&self) -> bool {
        matches!(self, SearchCategory::All | SearchCategory::Features)
    }
}

impl FromStr for SearchCategory {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(SearchCategory::All),
            "languages" => Ok(SearchCategory::Languages),
            "features" => Ok(SearchCategory::Features),
            other => Err(DatasetError::InvalidArgument(format!(
                "unknown search category '{}', expected all, languages or features",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCategory::All => write!(f, "all"),
            SearchCategory::Languages => write!(f, "languages"),
            SearchCategory::Features => write!(f, "features"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub category: SearchCategory,
    pub languages: Vec<&'a Language>,
    pub features: Vec<&'a Feature>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.features.is_empty()
    }
}

impl DatasetEngine {
    /// Languages whose name, ID or family contains `query`, case-insensitively.
    /// An empty query matches nothing.
    pub fn search_languages(&self, query: &str) -> Vec<&Language> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.tables()
            .languages
            .iter()
            .filter(|l| l.matches_text(&needle) || l.family.to_lowercase().contains(&needle))
            .take(self.config().search_limit)
            .collect()
    }

    /// Features whose name or ID contains `query`, case-insensitively.
    /// An empty query matches nothing.
    pub fn search_features(&self, query: &str) -> Vec<&Feature> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.tables()
            .features
            .iter()
            .filter(|f| f.matches_text(&needle))
            .take(self.config().search_limit)
            .collect()
    }

    /// Global search over the tables selected by `category`
    pub fn search(&self, query: &str, category: SearchCategory) -> SearchResults<'_> {
        let languages = if category.includes_languages() {
            self.search_languages(query)
        } else {
            Vec::new()
        };
        let features = if category.includes_features() {
            self.search_features(query)
        } else {
            Vec::new()
        };

        log::debug!(
            "search {:?} in {}: {} languages, {} features",
            query,
            category,
            languages.len(),
            features.len()
        );

        SearchResults {
            query: query.to_string(),
            category,
            languages,
            features,
        }
    }
}
