//! Ingredient table pass
//!
//! The table lives strictly between `LIST_START` and `LIST_END`. Each line is
//! one pipe-delimited row: `name | quantity | status | reason`.

use crate::classify::classify_status;
use crate::config::ParserConfig;
use nutriscan_domain::Ingredient;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Field delimiter inside a row
pub const FIELD_DELIMITER: char = '|';

static TABLE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)LIST_START(.*?)LIST_END").expect("valid table pattern"));

// Bullets, dashes, or "12." ordinals in front of a row. The ordinal must be
// followed by whitespace so "1.5% Milk Solids" keeps its name.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+•·]+|\d+\.(?:\s+|$))\s*").expect("valid list marker pattern")
});

/// Body of the table, or `None` when either marker is missing
pub fn extract_table(text: &str) -> Option<&str> {
    TABLE_SPAN
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Split one table line into trimmed fields
///
/// Strips any list-marker prefix and a single pair of outer pipes left over
/// from markdown tables.
pub fn split_row(line: &str) -> Vec<String> {
    let stripped = LIST_MARKER.replace(line, "");
    let mut line = stripped.trim();
    if let Some(rest) = line.strip_prefix(FIELD_DELIMITER) {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix(FIELD_DELIMITER) {
        line = rest;
    }
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split(FIELD_DELIMITER)
        .map(|f| f.trim().to_string())
        .collect()
}

/// `|---|:--:|` style rows
fn is_separator_row(fields: &[String]) -> bool {
    fields.iter().any(|f| f.contains('-'))
        && fields
            .iter()
            .all(|f| f.chars().all(|c| matches!(c, '-' | ':' | ' ')))
}

/// Whether a raw table line is a markdown separator row
fn is_separator_line(line: &str) -> bool {
    is_separator_row(&split_row(line))
}

/// Turn one line into an ingredient, or `None` if it is not a usable row
pub fn parse_row(line: &str, config: &ParserConfig) -> Option<Ingredient> {
    let fields = split_row(line);

    if fields.len() < config.min_row_fields {
        if !line.trim().is_empty() {
            debug!(fields = fields.len(), line = line.trim(), "Discarding short table row");
        }
        return None;
    }
    if is_separator_row(&fields) {
        return None;
    }

    let name = fields[0].clone();
    if name.is_empty() {
        debug!(line = line.trim(), "Discarding table row without a name");
        return None;
    }

    let quantity = match fields[1].as_str() {
        "" => config.default_quantity.clone(),
        q => q.to_string(),
    };
    let status = classify_status(&fields[2]);
    let description = match fields.get(3).map(String::as_str) {
        None | Some("") => config.default_description.clone(),
        Some(d) => d.to_string(),
    };

    Some(Ingredient {
        name,
        quantity,
        status,
        description,
    })
}

/// All accepted rows of the report's table, in order
///
/// A row directly followed by a markdown separator is a header and is
/// skipped. Returns an empty list when the table is missing or no row is
/// usable.
pub fn extract_ingredients(text: &str, config: &ParserConfig) -> Vec<Ingredient> {
    let Some(body) = extract_table(text) else {
        debug!("No LIST_START/LIST_END block in report");
        return Vec::new();
    };

    let lines: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();

    lines
        .iter()
        .enumerate()
        .filter(|(i, line)| {
            let is_header = lines.get(i + 1).is_some_and(|next| is_separator_line(next));
            if is_header {
                debug!(line = line.trim(), "Skipping markdown header row");
            }
            !is_header
        })
        .filter_map(|(_, line)| parse_row(line, config))
        .collect()
}
