// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for dataset loading and configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("CSV error in {file}: {message}")]
    Csv { file: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DatasetError {
    /// Attach the offending file name to a CSV parse failure
    pub fn csv(file: impl Into<String>, err: csv::Error) -> Self {
        DatasetError::Csv {
            file: file.into(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err.to_string())
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::Csv {
            file: "<unknown>".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Serialization(err.to_string())
    }
}

pub type DatasetResult<T> = Result<T, DatasetError>;
