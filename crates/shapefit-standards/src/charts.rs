#![deny(unsafe_code)]

use std::path::Path;

use shapefit_model::{SizeChart, SizeChartEntry, Unit, is_positive};
use tracing::info;

use crate::error::StandardsError;
use crate::paths::default_chart_path;

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a size chart CSV with `underband`, `overbust` and `size` columns.
///
/// Row order is kept; it decides ties during matching.
pub fn parse_size_chart_csv(path: &Path, unit: Unit) -> Result<SizeChart, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e))?
        .clone();

    let column = |name: &str| {
        header_index(&headers, name)
            .ok_or_else(|| StandardsError::csv(path, format!("missing column {name}")))
    };
    let idx_underband = column("underband")?;
    let idx_overbust = column("overbust")?;
    let idx_size = column("size")?;

    let mut entries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| StandardsError::csv(path, e))?;
        // Header is row 1.
        let row_number = index + 2;
        let invalid = |message: String| StandardsError::InvalidEntry {
            path: path.to_path_buf(),
            row: row_number,
            message,
        };

        let underband = parse_number(get_string(&row, idx_underband), "underband")
            .map_err(&invalid)?;
        let overbust =
            parse_number(get_string(&row, idx_overbust), "overbust").map_err(&invalid)?;
        let size = get_string(&row, idx_size)
            .ok_or_else(|| invalid("missing size".to_string()))?;

        entries.push(SizeChartEntry::new(underband, overbust, size));
    }

    finish(path, SizeChart::new(unit, entries))
}

/// Parses a JSON size chart (`{"unit": "in", "entries": [...]}`).
///
/// When `expected` is given the chart's unit must match it.
pub fn parse_size_chart_json(
    path: &Path,
    expected: Option<Unit>,
) -> Result<SizeChart, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let chart: SizeChart = serde_json::from_slice(&bytes).map_err(|source| StandardsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(expected) = expected.filter(|unit| *unit != chart.unit) {
        return Err(StandardsError::UnitMismatch {
            path: path.to_path_buf(),
            expected,
            actual: chart.unit,
        });
    }
    for (index, entry) in chart.entries.iter().enumerate() {
        validate_entry(entry).map_err(|message| StandardsError::InvalidEntry {
            path: path.to_path_buf(),
            row: index + 1,
            message,
        })?;
    }
    finish(path, chart)
}

/// Loads a size chart, picking the parser from the file extension.
///
/// CSV files carry no unit, so `unit` is required for them and checked
/// against the file for JSON.
pub fn load_size_chart(path: &Path, unit: Unit) -> Result<SizeChart, StandardsError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => parse_size_chart_csv(path, unit),
        Some("json") => parse_size_chart_json(path, Some(unit)),
        _ => Err(StandardsError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads the bundled size chart for `unit` from the standards directory.
pub fn load_default_size_chart(unit: Unit) -> Result<SizeChart, StandardsError> {
    parse_size_chart_csv(&default_chart_path(unit), unit)
}

fn parse_number(value: Option<&str>, column: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing {column}"))?;
    let number: f64 = value
        .parse()
        .map_err(|_| format!("{column} is not a number: {value}"))?;
    if !is_positive(number) {
        return Err(format!("{column} must be positive: {value}"));
    }
    Ok(number)
}

fn validate_entry(entry: &SizeChartEntry) -> Result<(), String> {
    if !is_positive(entry.underband) {
        return Err(format!("underband must be positive: {}", entry.underband));
    }
    if !is_positive(entry.overbust) {
        return Err(format!("overbust must be positive: {}", entry.overbust));
    }
    if entry.size.trim().is_empty() {
        return Err("missing size".to_string());
    }
    Ok(())
}

fn finish(path: &Path, chart: SizeChart) -> Result<SizeChart, StandardsError> {
    if chart.is_empty() {
        return Err(StandardsError::EmptyChart {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        unit = %chart.unit,
        entries = chart.len(),
        bands = chart.underbands().len(),
        "size chart loaded"
    );
    Ok(chart)
}
