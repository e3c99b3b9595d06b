// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLDF directory reader

use super::error::{DatasetError, DatasetResult};
use super::Tables;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const LANGUAGES_FILE: &str = "languages.csv";
pub const PARAMETERS_FILE: &str = "parameters.csv";
pub const CODES_FILE: &str = "codes.csv";
pub const VALUES_FILE: &str = "values.csv";
pub const CHAPTERS_FILE: &str = "chapters.csv";

/// Reads the CLDF tables of one dataset directory
pub struct CldfLoader {
    root: PathBuf,
}

impl CldfLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the dataset directory exists at all
    pub fn is_available(&self) -> bool {
        self.root.exists()
    }

    /// Read every table. Missing files become empty tables; any read or
    /// parse failure aborts the whole load.
    pub fn load_tables(&self) -> DatasetResult<Tables> {
        let tables = Tables {
            languages: self.read_table(LANGUAGES_FILE)?,
            features: self.read_table(PARAMETERS_FILE)?,
            codes: self.read_table(CODES_FILE)?,
            values: self.read_table(VALUES_FILE)?,
            chapters: self.read_table(CHAPTERS_FILE)?,
        };

        log::debug!(
            "Loaded CLDF tables from {:?}: {} languages, {} features, {} codes, {} values, {} chapters",
            self.root,
            tables.languages.len(),
            tables.features.len(),
            tables.codes.len(),
            tables.values.len(),
            tables.chapters.len()
        );

        Ok(tables)
    }

    /// Deserialize one CSV file into records, in file order
    ///
    /// Rows shorter than the header are padded with empty fields and longer
    /// rows lose their trailing fields, so one ragged row never costs the
    /// rest of the table.
    pub fn read_table<T: DeserializeOwned>(&self, file_name: &str) -> DatasetResult<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            log::debug!("{} not present in {:?}, using empty table", file_name, self.root);
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::csv(file_name, e))?
            .clone();

        let mut rows: Vec<T> = Vec::new();
        let mut ragged = 0usize;
        for record in reader.records() {
            let mut record = record.map_err(|e| DatasetError::csv(file_name, e))?;
            if record.len() != headers.len() {
                ragged += 1;
                record.truncate(headers.len());
                while record.len() < headers.len() {
                    record.push_field("");
                }
            }
            rows.push(
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| DatasetError::csv(file_name, e))?,
            );
        }

        if ragged > 0 {
            log::debug!("{}: {} rows did not match the header width", file_name, ragged);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::records::{Code, Language};
    use std::fs;

    #[test]
    fn test_missing_file_is_empty_table() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loader = CldfLoader::new(dir.path());

        let codes: Vec<Code> = loader.read_table(CODES_FILE).expect("missing file is not an error");
        assert!(codes.is_empty());
    }

    #[test]
    fn test_read_table_keeps_file_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(LANGUAGES_FILE),
            "ID,Name,Family\nzul,Zulu,Niger-Congo\nabk,Abkhaz,Northwest Caucasian\n",
        )
        .expect("write");

        let loader = CldfLoader::new(dir.path());
        let languages: Vec<Language> = loader.read_table(LANGUAGES_FILE).expect("parse");

        let ids: Vec<&str> = languages.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["zul", "abk"]);
        assert_eq!(languages[1].family, "Northwest Caucasian");
        assert_eq!(languages[1].latitude, "");
    }

    #[test]
    fn test_ragged_rows_are_padded_or_truncated() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(LANGUAGES_FILE),
            "ID,Name,Latitude,Longitude,Macroarea,Family\n\
             abk,Abkhaz,43.08,41.0,Eurasia,Northwest Caucasian\n\
             bsq,Basque,43.0,-3.0,Eurasia\n\
             eng,English,52.0,0.0,Eurasia,Indo-European,extra\n",
        )
        .expect("write");

        let loader = CldfLoader::new(dir.path());
        let languages: Vec<Language> = loader.read_table(LANGUAGES_FILE).expect("ragged rows load");

        let ids: Vec<&str> = languages.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["abk", "bsq", "eng"]);
        assert_eq!(languages[1].macroarea, "Eurasia");
        assert_eq!(languages[1].family, "");
        assert_eq!(languages[2].family, "Indo-European");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CODES_FILE), b"ID,Name\n1A-1,Sm\xffall\n").expect("write");

        let loader = CldfLoader::new(dir.path());
        let result: DatasetResult<Vec<Code>> = loader.read_table(CODES_FILE);
        assert!(matches!(result, Err(DatasetError::Csv { .. })));
    }
}
