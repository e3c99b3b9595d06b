// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for WALS Explorer
//!
//! Each handler runs one engine query and turns the result into a
//! [`ResultView`]; printing is left to [`run`].

use colored::Colorize;
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;

use super::commands::{Cli, Commands, OutputFormat};
use super::output::{ResultFormatter, ResultView};
use wals_explorer::{
    Code, DatasetEngine, EngineConfig, FeatureFilter, LanguageFilter, SearchCategory,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Build the engine configuration from `--config` and `--cldf`
///
/// `cldf` (the flag, or `WALS_CLDF_PATH` when the flag is absent) takes
/// precedence over the `cldf_path` stored in the config file.
pub fn load_config(
    config_file: Option<&PathBuf>,
    cldf: Option<&PathBuf>,
) -> CliResult<EngineConfig> {
    let mut config = match config_file {
        Some(path) => EngineConfig::from_json_file(path)
            .map_err(|e| format!("Failed to load config {:?}: {}", path, e))?,
        None => EngineConfig::default(),
    };

    if let Some(path) = cldf {
        config.cldf_path = path.clone();
    }

    Ok(config)
}

/// Load the dataset and run a parsed command line
pub fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_ref(), cli.cldf.as_ref())?;
    let engine = DatasetEngine::with_config(config)?;

    if !engine.data_available() {
        eprintln!(
            "{}",
            format!(
                "CLDF data not found at {:?}, showing the built-in sample",
                engine.config().cldf_path
            )
            .yellow()
        );
    }

    let (view, format) = execute(&engine, cli.command)?;
    println!("{}", ResultFormatter::format(&view, format));
    Ok(())
}

/// Run one command against the engine
pub fn execute(engine: &DatasetEngine, command: Commands) -> CliResult<(ResultView, OutputFormat)> {
    let rendered = match command {
        Commands::Version => return Err("version is handled before loading the dataset".into()),
        Commands::Stats { format } => (handle_stats(engine)?, format),
        Commands::DetailedStats { format } => (handle_detailed_stats(engine)?, format),
        Commands::Languages {
            page,
            per_page,
            search,
            family,
            macroarea,
            format,
        } => {
            let filter = LanguageFilter::new(
                page,
                per_page.unwrap_or(engine.config().languages_per_page),
            )
            .with_search(search)
            .with_family(family)
            .with_macroarea(macroarea);
            (handle_languages(engine, &filter)?, format)
        }
        Commands::Language { id, format } => (handle_language(engine, &id)?, format),
        Commands::Features {
            page,
            per_page,
            search,
            area,
            format,
        } => {
            let filter =
                FeatureFilter::new(page, per_page.unwrap_or(engine.config().features_per_page))
                    .with_search(search)
                    .with_area(area);
            (handle_features(engine, &filter)?, format)
        }
        Commands::Feature { id, format } => (handle_feature(engine, &id)?, format),
        Commands::Families { format } => (
            handle_labels("Language Families", "Family", engine.get_families()),
            format,
        ),
        Commands::Macroareas { format } => (
            handle_labels("Macroareas", "Macroarea", engine.get_macroareas()),
            format,
        ),
        Commands::Areas { format } => (
            handle_labels("Linguistic Areas", "Area", engine.get_areas()),
            format,
        ),
        Commands::Search {
            query,
            category,
            format,
        } => {
            let category: SearchCategory = category.parse()?;
            (handle_search(engine, &query, category)?, format)
        }
        Commands::Geo { format } => (handle_geo(engine)?, format),
        Commands::Distribution { feature_id, format } => {
            (handle_distribution(engine, &feature_id)?, format)
        }
        Commands::FeatureMap { feature_id, format } => {
            (handle_feature_map(engine, &feature_id)?, format)
        }
    };

    Ok(rendered)
}

fn handle_stats(engine: &DatasetEngine) -> CliResult<ResultView> {
    let stats = engine.get_statistics();
    let source = if stats.data_available {
        "CLDF dataset"
    } else {
        "built-in sample"
    };

    let mut view = ResultView::new("WALS Dataset", &["Metric", "Count"], serde_json::to_value(&stats)?)
        .with_detail("Source", source);
    view.push_row(vec!["Languages".to_string(), stats.languages.to_string()]);
    view.push_row(vec!["Typological features".to_string(), stats.features.to_string()]);
    view.push_row(vec!["Data points".to_string(), stats.values.to_string()]);
    view.push_row(vec!["Language families".to_string(), stats.families.to_string()]);
    Ok(view)
}

fn handle_detailed_stats(engine: &DatasetEngine) -> CliResult<ResultView> {
    let detailed = engine.get_detailed_statistics();

    let mut view = ResultView::new(
        "Languages by Family",
        &["Rank", "Family", "Languages"],
        serde_json::to_value(&detailed)?,
    )
    .with_detail("Languages", detailed.summary.languages.to_string())
    .with_detail("Families", detailed.summary.families.to_string());

    for (rank, (family, count)) in detailed.top_families.iter().enumerate() {
        view.push_row(vec![(rank + 1).to_string(), family.clone(), count.to_string()]);
    }

    let macroareas: Vec<String> = detailed
        .macroarea_distribution
        .iter()
        .map(|(area, count)| format!("{} {}", area, count))
        .collect();
    Ok(view.with_note(format!("Macroareas: {}", macroareas.join(", "))))
}

fn handle_languages(engine: &DatasetEngine, filter: &LanguageFilter) -> CliResult<ResultView> {
    let listing = engine.get_languages(filter);

    let mut view = ResultView::new(
        "Languages",
        &["ID", "Name", "Family", "Genus", "Macroarea", "ISO 639-3"],
        serde_json::to_value(&listing)?,
    )
    .with_detail("Matching", listing.total.to_string());

    for language in &listing.items {
        view.push_row(vec![
            language.id.clone(),
            language.name.clone(),
            language.family.clone(),
            language.genus.clone(),
            language.macroarea.clone(),
            language.iso639p3code.clone(),
        ]);
    }

    Ok(view.with_note(format!("Page {} of {}", listing.page, listing.total_pages)))
}

fn handle_language(engine: &DatasetEngine, id: &str) -> CliResult<ResultView> {
    let language = engine
        .get_language(id)
        .ok_or_else(|| format!("Language {} not found", id))?;
    let values = engine.get_values_for_language(id);

    let coordinates = language
        .coordinates()
        .map(|(lat, lon)| format!("{:.4}, {:.4}", lat, lon))
        .unwrap_or_else(|| "unknown".to_string());

    let mut view = ResultView::new(
        format!("{} ({})", language.name, language.id),
        &["Feature ID", "Feature", "Value"],
        json!({ "language": language, "values": values }),
    )
    .with_detail("Family", language.family.clone())
    .with_detail("Genus", language.genus.clone())
    .with_detail("Macroarea", language.macroarea.clone())
    .with_detail("Coordinates", coordinates)
    .with_detail("ISO 639-3", language.iso639p3code.clone())
    .with_detail("Glottocode", language.glottocode.clone());

    for value in &values {
        view.push_row(vec![
            value.value.parameter_id.clone(),
            value.feature_name.clone(),
            value.code_name.clone(),
        ]);
    }

    Ok(view)
}

fn handle_features(engine: &DatasetEngine, filter: &FeatureFilter) -> CliResult<ResultView> {
    let listing = engine.get_features(filter);

    let mut view = ResultView::new(
        "Typological Features",
        &["ID", "Name", "Chapter"],
        serde_json::to_value(&listing)?,
    )
    .with_detail("Matching", listing.total.to_string());

    for feature in &listing.items {
        view.push_row(vec![
            feature.id.clone(),
            feature.name.clone(),
            feature.chapter_id.clone(),
        ]);
    }

    Ok(view.with_note(format!("Page {} of {}", listing.page, listing.total_pages)))
}

fn handle_feature(engine: &DatasetEngine, id: &str) -> CliResult<ResultView> {
    let feature = engine
        .get_feature(id)
        .ok_or_else(|| format!("Feature {} not found", id))?;

    let mut codes = engine.get_codes_for_feature(id);
    codes.sort_by_key(|c| c.ordinal());
    let values = engine.get_values_for_feature(id);

    let mut view = ResultView::new(
        format!("{} ({})", feature.name, feature.id),
        &["Language ID", "Language", "Value"],
        json!({ "feature": feature, "codes": codes, "values": values }),
    )
    .with_detail("Chapter", feature.chapter_id.clone())
    .with_detail("Languages", values.len().to_string());

    for code in &codes {
        view = view.with_detail(format!("  {}", code.number), describe_code(code));
    }

    for value in &values {
        view.push_row(vec![
            value.value.language_id.clone(),
            value.language_name.clone(),
            value.code_name.clone(),
        ]);
    }

    Ok(view)
}

fn describe_code(code: &Code) -> String {
    if code.description.is_empty() {
        code.name.clone()
    } else {
        format!("{} - {}", code.name, code.description)
    }
}

fn handle_labels(title: &str, column: &str, labels: Vec<String>) -> ResultView {
    let mut view = ResultView::new(title, &[column], json!(labels));
    for label in labels {
        view.push_row(vec![label]);
    }
    view
}

fn handle_search(
    engine: &DatasetEngine,
    query: &str,
    category: SearchCategory,
) -> CliResult<ResultView> {
    let results = engine.search(query, category);

    let mut view = ResultView::new(
        format!("Search results for '{}'", query),
        &["Type", "ID", "Name"],
        serde_json::to_value(&results)?,
    )
    .with_detail("Category", category.to_string());

    for language in &results.languages {
        view.push_row(vec![
            "language".to_string(),
            language.id.clone(),
            language.name.clone(),
        ]);
    }
    for feature in &results.features {
        view.push_row(vec![
            "feature".to_string(),
            feature.id.clone(),
            feature.name.clone(),
        ]);
    }

    Ok(view)
}

fn handle_geo(engine: &DatasetEngine) -> CliResult<ResultView> {
    let languages = engine.get_languages_with_coordinates();

    let mut view = ResultView::new(
        "Languages with coordinates",
        &["id", "name", "lat", "lon", "family", "macroarea", "genus", "iso"],
        serde_json::to_value(&languages)?,
    );
    for geo in &languages {
        view.push_row(vec![
            geo.id.clone(),
            geo.name.clone(),
            geo.lat.to_string(),
            geo.lon.to_string(),
            geo.family.clone(),
            geo.macroarea.clone(),
            geo.genus.clone(),
            geo.iso.clone(),
        ]);
    }
    Ok(view)
}

fn handle_distribution(engine: &DatasetEngine, feature_id: &str) -> CliResult<ResultView> {
    let distribution = engine.get_feature_distribution(feature_id);

    let mut view = ResultView::new(
        format!("Value distribution of {}", feature_id),
        &["Value", "Languages"],
        serde_json::to_value(&distribution)?,
    );
    for (name, count) in &distribution {
        view.push_row(vec![name.clone(), count.to_string()]);
    }
    Ok(view)
}

fn handle_feature_map(engine: &DatasetEngine, feature_id: &str) -> CliResult<ResultView> {
    let map = engine
        .get_feature_map(feature_id)
        .ok_or_else(|| format!("Feature {} not found", feature_id))?;

    let mut view = ResultView::new(
        format!("{} ({})", map.feature.name, map.feature.id),
        &["Code", "Language", "Family", "Feature Value", "Latitude", "Longitude"],
        serde_json::to_value(&map)?,
    )
    .with_detail("Languages with data", map.languages_with_data.to_string())
    .with_detail("Possible values", map.codes.len().to_string())
    .with_detail(
        "Geographic coverage",
        format!("{:.1}%", map.coverage_percent),
    );

    for code in &map.codes {
        view = view.with_detail(
            format!("  {}", code.name),
            format!("{} languages", map.count_for(&code.name)),
        );
    }

    for point in &map.points {
        view.push_row(vec![
            point.id.clone(),
            point.name.clone(),
            point.family.clone(),
            point.value.clone(),
            point.lat.to_string(),
            point.lon.to_string(),
        ]);
    }

    for (value, families) in &map.top_families_by_value {
        let summary: Vec<String> = families
            .iter()
            .map(|f| format!("{} ({})", f.family, f.count))
            .collect();
        view = view.with_note(format!("{}: {}", value, summary.join(", ")));
    }

    Ok(view)
}
