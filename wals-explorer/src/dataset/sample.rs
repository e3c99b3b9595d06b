// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Built-in demonstration dataset
//!
//! Used when no CLDF directory is available or loading it fails:
//! 5 languages, 3 features, 6 codes and 4 values.

use super::records::{Code, Feature, Language, Value};
use super::Tables;

pub(crate) fn sample_tables() -> Tables {
    Tables {
        languages: sample_languages(),
        features: sample_features(),
        codes: sample_codes(),
        values: sample_values(),
        chapters: Vec::new(),
    }
}

fn language(
    id: &str,
    name: &str,
    lat: &str,
    lon: &str,
    family: &str,
    genus: &str,
    glottocode: &str,
) -> Language {
    Language {
        id: id.to_string(),
        name: name.to_string(),
        latitude: lat.to_string(),
        longitude: lon.to_string(),
        macroarea: "Eurasia".to_string(),
        family: family.to_string(),
        genus: genus.to_string(),
        subfamily: String::new(),
        iso639p3code: id.to_string(),
        glottocode: glottocode.to_string(),
    }
}

fn sample_languages() -> Vec<Language> {
    vec![
        language("eng", "English", "51.5", "-0.1", "Indo-European", "Germanic", "stan1293"),
        language("spa", "Spanish", "40.4", "-3.7", "Indo-European", "Romance", "stan1288"),
        language("cmn", "Mandarin Chinese", "39.9", "116.4", "Sino-Tibetan", "Chinese", "mand1415"),
        language("ara", "Arabic", "30.0", "31.2", "Afro-Asiatic", "Semitic", "stan1318"),
        language("jpn", "Japanese", "35.7", "139.7", "Japanese", "Japanese", "nucl1643"),
    ]
}

fn sample_features() -> Vec<Feature> {
    [
        ("81A", "Order of Subject, Object and Verb", "s4"),
        ("1A", "Consonant Inventories", "s1"),
        ("2A", "Vowel Quality Inventories", "s1"),
    ]
    .into_iter()
    .map(|(id, name, chapter)| Feature {
        id: id.to_string(),
        name: name.to_string(),
        chapter_id: chapter.to_string(),
    })
    .collect()
}

fn sample_codes() -> Vec<Code> {
    [
        ("81A-1", "81A", "SOV", "1"),
        ("81A-2", "81A", "SVO", "2"),
        ("81A-3", "81A", "VSO", "3"),
        ("1A-1", "1A", "Small", "1"),
        ("1A-2", "1A", "Moderately small", "2"),
        ("1A-3", "1A", "Average", "3"),
    ]
    .into_iter()
    .map(|(id, parameter, name, number)| Code {
        id: id.to_string(),
        parameter_id: parameter.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        description: String::new(),
    })
    .collect()
}

fn sample_values() -> Vec<Value> {
    [
        ("eng-81A", "eng", "81A-2", "2"),
        ("spa-81A", "spa", "81A-2", "2"),
        ("jpn-81A", "jpn", "81A-1", "1"),
        ("ara-81A", "ara", "81A-3", "3"),
    ]
    .into_iter()
    .map(|(id, language, code, value)| Value {
        id: id.to_string(),
        language_id: language.to_string(),
        parameter_id: "81A".to_string(),
        code_id: code.to_string(),
        value: value.to_string(),
    })
    .collect()
}
