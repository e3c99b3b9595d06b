// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dataset Query Engine - read-only queries over the loaded WALS tables
//!
//! The engine owns one dataset handle. Tables are loaded on first access and
//! never change afterwards, so a `DatasetEngine` can be shared between
//! threads behind an `Arc` without any locking.

use super::config::EngineConfig;
use super::listing::{paginate, FeatureFilter, LanguageFilter, Listing};
use crate::dataset::{Code, Dataset, DatasetResult, Feature, Language, Tables};
use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Read-only query engine over one WALS dataset
pub struct DatasetEngine {
    config: EngineConfig,
    dataset: OnceCell<Dataset>,
}

impl DatasetEngine {
    /// Create an engine that loads its tables lazily on the first query
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            dataset: OnceCell::new(),
        }
    }

    /// Create an engine for the CLDF directory at `path` and load it now
    ///
    /// Never fails: a missing or unreadable directory yields the built-in
    /// sample with `data_available == false`.
    ///
    /// # Example
    /// ```no_run
    /// use wals_explorer::DatasetEngine;
    ///
    /// let engine = DatasetEngine::initialize("./cldf");
    /// let stats = engine.get_statistics();
    /// println!("{} languages", stats.languages);
    /// ```
    pub fn initialize(path: impl AsRef<Path>) -> Self {
        let engine = Self::new(EngineConfig::with_path(path));
        engine.dataset();
        engine
    }

    /// Validate `config` and load its dataset now
    pub fn with_config(config: EngineConfig) -> DatasetResult<Self> {
        config.validate()?;
        let engine = Self::new(config);
        engine.dataset();
        Ok(engine)
    }

    /// Wrap an already loaded dataset
    pub fn from_dataset(dataset: Dataset, config: EngineConfig) -> Self {
        Self {
            config,
            dataset: OnceCell::with_value(dataset),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the tables have been populated yet
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// False when the built-in sample is being served
    pub fn data_available(&self) -> bool {
        self.dataset().data_available
    }

    fn dataset(&self) -> &Dataset {
        self.dataset
            .get_or_init(|| Dataset::load(&self.config.cldf_path))
    }

    pub(crate) fn tables(&self) -> &Tables {
        &self.dataset().tables
    }

    // ==================== Lookups ====================

    pub fn get_all_languages(&self) -> &[Language] {
        &self.tables().languages
    }

    pub fn get_all_features(&self) -> &[Feature] {
        &self.tables().features
    }

    /// First language with exactly this ID
    pub fn get_language(&self, language_id: &str) -> Option<&Language> {
        self.tables().languages.iter().find(|l| l.id == language_id)
    }

    /// First feature with exactly this ID
    pub fn get_feature(&self, feature_id: &str) -> Option<&Feature> {
        self.tables().features.iter().find(|f| f.id == feature_id)
    }

    /// Codes of a feature in table order. Callers wanting numeric order sort
    /// by [`Code::ordinal`].
    pub fn get_codes_for_feature(&self, feature_id: &str) -> Vec<&Code> {
        self.tables()
            .codes
            .iter()
            .filter(|c| c.parameter_id == feature_id)
            .collect()
    }

    /// Distinct non-empty families, sorted
    pub fn get_families(&self) -> Vec<String> {
        distinct_sorted(self.tables().languages.iter().map(|l| l.family.as_str()))
    }

    /// Distinct non-empty macroareas, sorted
    pub fn get_macroareas(&self) -> Vec<String> {
        distinct_sorted(self.tables().languages.iter().map(|l| l.macroarea.as_str()))
    }

    /// Distinct non-empty chapter areas, sorted
    pub fn get_areas(&self) -> Vec<String> {
        distinct_sorted(self.tables().chapters.iter().map(|c| c.area_id.as_str()))
    }

    // ==================== Listings ====================

    /// Languages matching every supplied filter, one page at a time
    pub fn get_languages(&self, filter: &LanguageFilter) -> Listing<&Language> {
        let search = filter.search.to_lowercase();

        let filtered: Vec<&Language> = self
            .tables()
            .languages
            .iter()
            .filter(|l| search.is_empty() || l.matches_text(&search))
            .filter(|l| filter.family.is_empty() || l.family == filter.family)
            .filter(|l| filter.macroarea.is_empty() || l.macroarea == filter.macroarea)
            .collect();

        log::debug!(
            "get_languages search={:?} family={:?} macroarea={:?} -> {} rows",
            filter.search,
            filter.family,
            filter.macroarea,
            filtered.len()
        );

        paginate(filtered, filter.page, filter.per_page)
    }

    /// Features matching the search text, one page at a time
    pub fn get_features(&self, filter: &FeatureFilter) -> Listing<&Feature> {
        // `filter.area` is intentionally not applied: feature rows have no
        // area column to match against.
        let search = filter.search.to_lowercase();

        let filtered: Vec<&Feature> = self
            .tables()
            .features
            .iter()
            .filter(|f| search.is_empty() || f.matches_text(&search))
            .collect();

        log::debug!(
            "get_features search={:?} area={:?} -> {} rows",
            filter.search,
            filter.area,
            filtered.len()
        );

        paginate(filtered, filter.page, filter.per_page)
    }

    // ==================== Join helpers ====================

    /// Code ID -> code, keeping the first row for duplicated IDs
    pub(crate) fn code_index(&self) -> HashMap<&str, &Code> {
        let mut index = HashMap::with_capacity(self.tables().codes.len());
        for code in &self.tables().codes {
            index.entry(code.id.as_str()).or_insert(code);
        }
        index
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_engine() -> DatasetEngine {
        DatasetEngine::from_dataset(Dataset::sample(), EngineConfig::default())
    }

    #[test]
    fn test_lazy_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let engine = DatasetEngine::new(EngineConfig::with_path(dir.path().join("missing")));

        assert!(!engine.is_loaded());
        assert_eq!(engine.get_all_languages().len(), 5);
        assert!(engine.is_loaded());
        assert!(!engine.data_available());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = EngineConfig::default().with_search_limit(0);
        assert!(DatasetEngine::with_config(config).is_err());
    }

    #[test]
    fn test_lookup_by_id() {
        let engine = sample_engine();
        assert_eq!(engine.get_language("jpn").map(|l| l.name.as_str()), Some("Japanese"));
        assert_eq!(
            engine.get_feature("1A").map(|f| f.name.as_str()),
            Some("Consonant Inventories")
        );
        assert!(engine.get_language("xxx").is_none());
        assert!(engine.get_feature("").is_none());
    }

    #[test]
    fn test_codes_for_feature_table_order() {
        let engine = sample_engine();
        let codes = engine.get_codes_for_feature("81A");
        let ids: Vec<&str> = codes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["81A-1", "81A-2", "81A-3"]);
        assert!(engine.get_codes_for_feature("2A").is_empty());
    }

    #[test]
    fn test_families_and_macroareas() {
        let engine = sample_engine();
        assert_eq!(
            engine.get_families(),
            vec!["Afro-Asiatic", "Indo-European", "Japanese", "Sino-Tibetan"]
        );
        assert_eq!(engine.get_macroareas(), vec!["Eurasia"]);
        assert!(engine.get_areas().is_empty());
    }

    #[test]
    fn test_language_filters_and() {
        let engine = sample_engine();

        let all = engine.get_languages(&LanguageFilter::new(1, 50));
        assert_eq!(all.total, 5);

        let indo = engine.get_languages(&LanguageFilter::new(1, 50).with_family("Indo-European"));
        assert_eq!(indo.total, 2);

        let narrowed = engine.get_languages(
            &LanguageFilter::new(1, 50)
                .with_family("Indo-European")
                .with_search("ENG"),
        );
        assert_eq!(narrowed.total, 1);
        assert_eq!(narrowed.items[0].id, "eng");

        let none = engine.get_languages(&LanguageFilter::new(1, 50).with_macroarea("Africa"));
        assert_eq!(none.total, 0);
        assert_eq!(none.total_pages, 1);
    }

    #[test]
    fn test_feature_area_is_ignored() {
        let engine = sample_engine();
        let plain = engine.get_features(&FeatureFilter::new(1, 30));
        let with_area = engine.get_features(&FeatureFilter::new(1, 30).with_area("Morphology"));
        assert_eq!(plain, with_area);
        assert_eq!(plain.total, 3);

        let inventories = engine.get_features(&FeatureFilter::new(1, 30).with_search("inventor"));
        assert_eq!(inventories.total, 2);
    }

    #[test]
    fn test_code_index_keeps_first_duplicate() {
        let mut dataset = Dataset::sample();
        let mut duplicate = dataset.tables.codes[0].clone();
        duplicate.name = "Shadowed".to_string();
        dataset.tables.codes.push(duplicate);

        let engine = DatasetEngine::from_dataset(dataset, EngineConfig::default());
        let index = engine.code_index();
        assert_eq!(index.get("81A-1").map(|c| c.name.as_str()), Some("SOV"));
    }
}
