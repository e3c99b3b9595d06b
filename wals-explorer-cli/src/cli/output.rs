// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use super::commands::OutputFormat;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

/// A query result prepared for every output format
///
/// Table and CSV output render `columns`/`rows`; JSON output renders `json`,
/// which keeps the full structure of the engine's result.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub title: String,
    /// Key/value lines shown above the table
    pub details: Vec<(String, String)>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Lines shown below the table
    pub notes: Vec<String>,
    pub json: serde_json::Value,
}

impl ResultView {
    pub fn new(title: impl Into<String>, columns: &[&str], json: serde_json::Value) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            notes: Vec::new(),
            json,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((key.into(), value.into()));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Result formatter for different output formats
pub struct ResultFormatter;

impl ResultFormatter {
    /// Format a result in the specified format
    pub fn format(view: &ResultView, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => Self::format_table(view),
            OutputFormat::Json => Self::format_json(view),
            OutputFormat::Csv => Self::format_csv(view),
        }
    }

    /// Format results as a table using comfy-table
    fn format_table(view: &ResultView) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", view.title.bold().green()));
        for (key, value) in &view.details {
            output.push_str(&format!("{}: {}\n", key.bold(), value));
        }

        if view.rows.is_empty() {
            if !view.columns.is_empty() {
                output.push_str(&format!("{}\n", "No results found".yellow()));
            }
        } else {
            output.push('\n');

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);

            let header_cells: Vec<Cell> = view
                .columns
                .iter()
                .map(|col| Cell::new(col).fg(Color::Green))
                .collect();
            table.set_header(header_cells);

            for row in &view.rows {
                table.add_row(row.clone());
            }

            output.push_str(&table.to_string());
            output.push('\n');
        }

        for note in &view.notes {
            output.push_str(&format!("{}\n", note.cyan()));
        }

        output
    }

    /// Format results as JSON
    fn format_json(view: &ResultView) -> String {
        serde_json::to_string_pretty(&view.json).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize results to JSON\"}".to_string()
        })
    }

    /// Format results as CSV
    fn format_csv(view: &ResultView) -> String {
        Self::write_csv(view).unwrap_or_else(|e| format!("# Could not write CSV: {}\n", e))
    }

    fn write_csv(view: &ResultView) -> Result<String, Box<dyn std::error::Error>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&view.columns)?;
        for row in &view.rows {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        Ok(String::from_utf8(bytes)?)
    }
}
