//! Standards directory path resolution.

use std::path::PathBuf;

use shapefit_model::Unit;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "SHAPEFIT_STANDARDS_DIR";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `SHAPEFIT_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Directory holding the bundled size charts.
pub fn charts_dir() -> PathBuf {
    standards_root().join("charts")
}

/// Path of the default size chart for `unit`.
pub fn default_chart_path(unit: Unit) -> PathBuf {
    charts_dir().join(format!("size_chart_{}.csv", unit.as_str()))
}
