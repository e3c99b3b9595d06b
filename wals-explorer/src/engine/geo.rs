// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Geographic views: languages with coordinates and per-feature maps

use super::query_engine::DatasetEngine;
use super::statistics::UNKNOWN_BUCKET;
use crate::dataset::{Code, Feature, Language};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Codes summarised in `top_families_by_value`
const MAP_VALUES_SUMMARISED: usize = 5;
/// Families listed per summarised code
const MAP_FAMILIES_PER_VALUE: usize = 5;

/// A language with parsed coordinates, ready for a map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLanguage {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub family: String,
    pub macroarea: String,
    pub genus: String,
    pub iso: String,
}

impl GeoLanguage {
    fn from_language(language: &Language) -> Option<Self> {
        let (lat, lon) = language.coordinates()?;
        Some(Self {
            id: language.id.clone(),
            name: language.name.clone(),
            lat,
            lon,
            family: or_unknown(&language.family),
            macroarea: or_unknown(&language.macroarea),
            genus: language.genus.clone(),
            iso: language.iso639p3code.clone(),
        })
    }
}

fn or_unknown(label: &str) -> String {
    if label.is_empty() {
        UNKNOWN_BUCKET.to_string()
    } else {
        label.to_string()
    }
}

/// One plotted value of a feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMapPoint {
    pub id: String,
    pub name: String,
    pub family: String,
    pub lat: f64,
    pub lon: f64,
    pub code_id: String,
    /// Code name
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyCount {
    pub family: String,
    pub count: usize,
}

/// Geographic distribution of one feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMap {
    pub feature: Feature,
    /// The feature's codes sorted by ordinal
    pub codes: Vec<Code>,
    pub points: Vec<FeatureMapPoint>,
    /// Distinct languages among `points`
    pub languages_with_data: usize,
    /// Share of languages with coordinates that have a plotted value
    pub coverage_percent: f64,
    /// Code name -> most frequent families among its points
    pub top_families_by_value: BTreeMap<String, Vec<FamilyCount>>,
}

impl FeatureMap {
    /// Number of points carrying the given code name
    pub fn count_for(&self, code_name: &str) -> usize {
        self.points.iter().filter(|p| p.value == code_name).count()
    }
}

impl DatasetEngine {
    /// Languages whose latitude and longitude both parse; others are skipped
    pub fn get_languages_with_coordinates(&self) -> Vec<GeoLanguage> {
        self.tables()
            .languages
            .iter()
            .filter_map(GeoLanguage::from_language)
            .collect()
    }

    /// Join a feature's values with language coordinates
    ///
    /// A value is plotted when its language has coordinates and its code is
    /// one of the feature's codes. Returns `None` for an unknown feature.
    pub fn get_feature_map(&self, feature_id: &str) -> Option<FeatureMap> {
        let feature = self.get_feature(feature_id)?.clone();

        let mut codes: Vec<Code> = self
            .get_codes_for_feature(feature_id)
            .into_iter()
            .cloned()
            .collect();
        codes.sort_by_key(Code::ordinal);

        let geo = self.get_languages_with_coordinates();
        let coords: HashMap<&str, &GeoLanguage> =
            geo.iter().rev().map(|g| (g.id.as_str(), g)).collect();
        let code_names: HashMap<&str, &str> = codes
            .iter()
            .rev()
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();

        let mut points = Vec::new();
        let mut plotted: HashSet<&str> = HashSet::new();
        for value in self
            .tables()
            .values
            .iter()
            .filter(|v| v.parameter_id == feature_id)
        {
            let (Some(language), Some(code_name)) = (
                coords.get(value.language_id.as_str()),
                code_names.get(value.code_id.as_str()),
            ) else {
                continue;
            };

            points.push(FeatureMapPoint {
                id: language.id.clone(),
                name: language.name.clone(),
                family: language.family.clone(),
                lat: language.lat,
                lon: language.lon,
                code_id: value.code_id.clone(),
                value: (*code_name).to_string(),
            });
            plotted.insert(value.language_id.as_str());
        }

        let languages_with_data = plotted.len();
        let coverage_percent = if geo.is_empty() {
            0.0
        } else {
            languages_with_data as f64 / geo.len() as f64 * 100.0
        };

        let top_families_by_value = summarise_families(&codes, &points);

        log::debug!(
            "Feature map {}: {} points, {} languages, {:.1}% coverage",
            feature_id,
            points.len(),
            languages_with_data,
            coverage_percent
        );

        Some(FeatureMap {
            feature,
            codes,
            points,
            languages_with_data,
            coverage_percent,
            top_families_by_value,
        })
    }
}

fn summarise_families(
    sorted_codes: &[Code],
    points: &[FeatureMapPoint],
) -> BTreeMap<String, Vec<FamilyCount>> {
    let mut summary = BTreeMap::new();

    for code in sorted_codes.iter().take(MAP_VALUES_SUMMARISED) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for point in points.iter().filter(|p| p.value == code.name) {
            *counts.entry(point.family.as_str()).or_insert(0) += 1;
        }
        if counts.is_empty() {
            continue;
        }

        let mut families: Vec<FamilyCount> = counts
            .into_iter()
            .map(|(family, count)| FamilyCount {
                family: family.to_string(),
                count,
            })
            .collect();
        families.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.family.cmp(&b.family)));
        families.truncate(MAP_FAMILIES_PER_VALUE);

        summary.insert(code.name.clone(), families);
    }

    summary
}
