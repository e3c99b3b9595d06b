// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory CLDF dataset
//!
//! This module provides:
//! - Typed records for the CLDF tables
//! - A CSV loader for a CLDF directory
//! - The built-in demonstration sample used as a fallback

pub mod error;
pub mod loader;
pub mod records;
mod sample;

pub use error::{DatasetError, DatasetResult};
pub use loader::CldfLoader;
pub use records::{Chapter, Code, Feature, Language, Value};

use std::path::Path;

/// All tables of one dataset, each in file order
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub languages: Vec<Language>,
    pub features: Vec<Feature>,
    pub codes: Vec<Code>,
    pub values: Vec<Value>,
    pub chapters: Vec<Chapter>,
}

/// Loaded tables plus where they came from
#[derive(Debug, Clone)]
pub struct Dataset {
    pub tables: Tables,
    /// False when the built-in sample is in use
    pub data_available: bool,
}

impl Dataset {
    /// Load the CLDF directory at `path`, falling back to the built-in sample
    /// when the directory is missing or any table fails to load.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let loader = CldfLoader::new(path);

        if !loader.is_available() {
            log::warn!(
                "CLDF directory {:?} not found, loading sample data for demonstration",
                loader.root()
            );
            return Self::sample();
        }

        match loader.load_tables() {
            Ok(tables) => {
                log::info!(
                    "Loaded WALS dataset from {:?} ({} languages, {} features, {} values)",
                    loader.root(),
                    tables.languages.len(),
                    tables.features.len(),
                    tables.values.len()
                );
                Self {
                    tables,
                    data_available: true,
                }
            }
            Err(e) => {
                log::warn!("Error loading CLDF data: {}. Falling back to sample data", e);
                Self::sample()
            }
        }
    }

    /// The built-in demonstration dataset
    pub fn sample() -> Self {
        Self {
            tables: sample::sample_tables(),
            data_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_uses_sample() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dataset = Dataset::load(dir.path().join("no-such-cldf"));

        assert!(!dataset.data_available);
        assert_eq!(dataset.tables.languages.len(), 5);
    }

    #[test]
    fn test_empty_directory_is_available_but_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dataset = Dataset::load(dir.path());

        assert!(dataset.data_available);
        assert!(dataset.tables.languages.is_empty());
        assert!(dataset.tables.values.is_empty());
    }

    #[test]
    fn test_parse_failure_uses_sample() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(loader::VALUES_FILE), b"ID,Value\na,\xff\n").expect("write");

        let dataset = Dataset::load(dir.path());
        assert!(!dataset.data_available);
        assert_eq!(dataset.tables.codes.len(), 6);
    }

    #[test]
    fn test_short_row_keeps_real_dataset() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(loader::LANGUAGES_FILE),
            "ID,Name,Latitude,Longitude,Macroarea,Family\n\
             abk,Abkhaz,43.08,41.0,Eurasia,Northwest Caucasian\n\
             bsq,Basque,43.0,-3.0,Eurasia\n",
        )
        .expect("write");

        let dataset = Dataset::load(dir.path());
        assert!(dataset.data_available);
        let ids: Vec<&str> = dataset.tables.languages.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["abk", "bsq"]);
        assert_eq!(dataset.tables.languages[1].family, "");
    }
}
