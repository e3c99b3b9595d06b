// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wals_explorer::engine::CLDF_PATH_ENV;

#[derive(Parser, Debug)]
#[command(name = "wals", version, about = "Browse the World Atlas of Language Structures")]
pub struct Cli {
    /// CLDF directory (languages.csv, parameters.csv, codes.csv, values.csv).
    /// Read from WALS_CLDF_PATH when not given; either one overrides the
    /// cldf_path of --config
    #[arg(long, global = true, env = CLDF_PATH_ENV)]
    pub cldf: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Dataset overview: table sizes and data source
    Stats {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Languages per family and macroarea
    DetailedStats {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Browse languages
    Languages {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
        /// Substring of the name or ID
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        family: String,
        #[arg(long, default_value = "")]
        macroarea: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// One language and all its feature values
    Language {
        id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Browse typological features
    Features {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        per_page: Option<usize>,
        #[arg(short, long, default_value = "")]
        search: String,
        /// Linguistic area (accepted, currently not applied)
        #[arg(long, default_value = "")]
        area: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// One feature with its codes and values
    Feature {
        id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List language families
    Families {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List macroareas
    Macroareas {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List linguistic areas from chapters.csv
    Areas {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Search languages and features
    Search {
        #[arg(value_name = "Q")]
        query: String,
        /// all, languages or features
        #[arg(short, long, default_value = "all")]
        category: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Languages with coordinates
    Geo {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Value distribution of one feature
    Distribution {
        feature_id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Geographic distribution of one feature's values
    FeatureMap {
        feature_id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
