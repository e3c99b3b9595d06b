// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Value joins: a value row plus the display names of what it references.
//! Unresolved references produce empty names, never errors.

use super::query_engine::DatasetEngine;
use crate::dataset::Value;
use serde::Serialize;

/// A value of one language, annotated with feature and code names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageValue {
    #[serde(flatten)]
    pub value: Value,
    #[serde(rename = "Feature_Name")]
    pub feature_name: String,
    #[serde(rename = "Code_Name")]
    pub code_name: String,
}

/// A value of one feature, annotated with language and code names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureValue {
    #[serde(flatten)]
    pub value: Value,
    #[serde(rename = "Language_Name")]
    pub language_name: String,
    #[serde(rename = "Code_Name")]
    pub code_name: String,
}

impl DatasetEngine {
    /// All values recorded for a language, in table order
    pub fn get_values_for_language(&self, language_id: &str) -> Vec<LanguageValue> {
        let codes = self.code_index();

        self.tables()
            .values
            .iter()
            .filter(|v| v.language_id == language_id)
            .map(|v| LanguageValue {
                value: v.clone(),
                feature_name: self
                    .get_feature(&v.parameter_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default(),
                code_name: codes
                    .get(v.code_id.as_str())
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// All values recorded for a feature, in table order
    pub fn get_values_for_feature(&self, feature_id: &str) -> Vec<FeatureValue> {
        let codes = self.code_index();

        self.tables()
            .values
            .iter()
            .filter(|v| v.parameter_id == feature_id)
            .map(|v| FeatureValue {
                value: v.clone(),
                language_name: self
                    .get_language(&v.language_id)
                    .map(|l| l.name.clone())
                    .unwrap_or_default(),
                code_name: codes
                    .get(v.code_id.as_str())
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }
}
