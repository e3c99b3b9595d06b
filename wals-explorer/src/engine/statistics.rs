// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dataset statistics and value distributions

use super::query_engine::DatasetEngine;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Bucket for languages without a family or macroarea
pub const UNKNOWN_BUCKET: &str = "Unknown";

/// Label -> number of occurrences
pub type Distribution = BTreeMap<String, usize>;

/// Table sizes and data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStatistics {
    pub languages: usize,
    pub features: usize,
    pub values: usize,
    /// Number of distinct non-empty families
    pub families: usize,
    pub data_available: bool,
}

/// Basic statistics plus language distributions for charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedStatistics {
    #[serde(flatten)]
    pub summary: DatasetStatistics,
    pub family_distribution: Distribution,
    pub macroarea_distribution: Distribution,
    /// Largest families first, ties broken by name
    pub top_families: Vec<(String, usize)>,
}

impl DatasetEngine {
    pub fn get_statistics(&self) -> DatasetStatistics {
        let tables = self.tables();
        DatasetStatistics {
            languages: tables.languages.len(),
            features: tables.features.len(),
            values: tables.values.len(),
            families: self.get_families().len(),
            data_available: self.data_available(),
        }
    }

    pub fn get_detailed_statistics(&self) -> DetailedStatistics {
        let languages = &self.tables().languages;

        let family_distribution = count_labels(languages.iter().map(|l| l.family.as_str()));
        let macroarea_distribution =
            count_labels(languages.iter().map(|l| l.macroarea.as_str()));

        let mut top_families: Vec<(String, usize)> = family_distribution
            .iter()
            .map(|(family, count)| (family.clone(), *count))
            .collect();
        top_families.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_families.truncate(self.config().top_families_limit);

        DetailedStatistics {
            summary: self.get_statistics(),
            family_distribution,
            macroarea_distribution,
            top_families,
        }
    }

    /// Number of values per code name of a feature
    ///
    /// Every code of the feature is present, zero-count codes included.
    /// Values whose code does not resolve to one of the feature's codes are
    /// not counted.
    pub fn get_feature_distribution(&self, feature_id: &str) -> Distribution {
        let codes = self.get_codes_for_feature(feature_id);

        let mut distribution: Distribution =
            codes.iter().map(|c| (c.name.clone(), 0)).collect();
        let names_by_id: HashMap<&str, &str> = codes
            .iter()
            .rev()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();

        let mut dropped = 0usize;
        for value in self
            .tables()
            .values
            .iter()
            .filter(|v| v.parameter_id == feature_id)
        {
            match names_by_id.get(value.code_id.as_str()) {
                Some(name) => *distribution.entry((*name).to_string()).or_insert(0) += 1,
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            log::debug!(
                "Feature {}: {} value(s) with unresolved codes left out of the distribution",
                feature_id,
                dropped
            );
        }

        distribution
    }
}

fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Distribution {
    let mut counts = Distribution::new();
    for label in labels {
        let label = if label.is_empty() { UNKNOWN_BUCKET } else { label };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}
