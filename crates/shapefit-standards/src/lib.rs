#![deny(unsafe_code)]

pub mod charts;
pub mod error;
pub mod paths;

pub use crate::charts::{
    load_default_size_chart, load_size_chart, parse_size_chart_csv, parse_size_chart_json,
};
pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, charts_dir, default_chart_path, standards_root};
