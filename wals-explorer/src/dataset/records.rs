// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Typed CLDF records
//!
//! One struct per CLDF table. Field names follow Rust conventions while the
//! serde attributes keep the CLDF column names, so the same types deserialize
//! from the CSV files and serialize back out with the familiar headers.
//! Columns absent from a file deserialize to empty strings.

use serde::{Deserialize, Serialize};

/// A row of `languages.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
    #[serde(rename = "Macroarea")]
    pub macroarea: String,
    #[serde(rename = "Family")]
    pub family: String,
    #[serde(rename = "Genus")]
    pub genus: String,
    #[serde(rename = "Subfamily")]
    pub subfamily: String,
    #[serde(rename = "ISO639P3code")]
    pub iso639p3code: String,
    #[serde(rename = "Glottocode")]
    pub glottocode: String,
}

impl Language {
    /// Parsed `(latitude, longitude)`, if both are present and numeric
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = parse_coordinate(&self.latitude)?;
        let lon = parse_coordinate(&self.longitude)?;
        Some((lat, lon))
    }

    /// Case-insensitive substring match on name or ID.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// A row of `parameters.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Chapter_ID")]
    pub chapter_id: String,
}

impl Feature {
    /// Case-insensitive substring match on name or ID.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// A row of `codes.csv`: one admissible value of a feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Code {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Code {
    /// `Number` as an integer for ordering; unparsable numbers sort as 0
    pub fn ordinal(&self) -> i64 {
        self.number.trim().parse().unwrap_or(0)
    }
}

/// A row of `values.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Language_ID")]
    pub language_id: String,
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,
    #[serde(rename = "Code_ID")]
    pub code_id: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// A row of the optional `chapters.csv`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Area_ID")]
    pub area_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(lat: &str, lon: &str) -> Language {
        Language {
            id: "x".to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_coordinates_parse() {
        assert_eq!(language("51.5", "-0.1").coordinates(), Some((51.5, -0.1)));
        assert_eq!(language(" 10 ", "20").coordinates(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_coordinates_missing_or_malformed() {
        assert_eq!(language("", "-0.1").coordinates(), None);
        assert_eq!(language("51.5", "").coordinates(), None);
        assert_eq!(language("north", "-0.1").coordinates(), None);
    }

    #[test]
    fn test_code_ordinal() {
        let mut code = Code {
            number: "3".to_string(),
            ..Default::default()
        };
        assert_eq!(code.ordinal(), 3);
        code.number = "n/a".to_string();
        assert_eq!(code.ordinal(), 0);
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let mut reader = csv::Reader::from_reader("ID,Name\n81A,Word Order\n".as_bytes());
        let features: Vec<Feature> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("rows should parse");

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].id, "81A");
        assert_eq!(features[0].chapter_id, "");
    }

    #[test]
    fn test_serializes_with_cldf_headers() {
        let value = Value {
            id: "eng-81A".to_string(),
            language_id: "eng".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&value).expect("serializable");
        assert_eq!(json["ID"], "eng-81A");
        assert_eq!(json["Language_ID"], "eng");
        assert_eq!(json["Code_ID"], "");
    }
}
