//! Quiz configuration file support.
//!
//! The file is TOML with an optional `[quiz]` table:
//!
//! ```toml
//! [quiz]
//! flow = "band_fit_legacy"
//! band_fit_retention = "discard"
//! start_over = "restart"
//! ```
//!
//! Missing keys fall back to [`QuizOptions::default`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shapefit_model::{BandFitRetention, FlowVariant, QuizOptions, StartOverPolicy};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    quiz: QuizOptions,
}

/// Parse quiz options from TOML text.
pub fn parse_quiz_options(text: &str) -> Result<QuizOptions> {
    let file: ConfigFile = toml::from_str(text).context("parse quiz config")?;
    Ok(file.quiz)
}

/// Load quiz options from `path`, or the defaults when no file is given.
pub fn load_quiz_options(path: Option<&Path>) -> Result<QuizOptions> {
    let Some(path) = path else {
        return Ok(QuizOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read quiz config {}", path.display()))?;
    let options =
        parse_quiz_options(&text).with_context(|| format!("in {}", path.display()))?;
    debug!(path = %path.display(), ?options, "quiz config loaded");
    Ok(options)
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub flow: Option<FlowVariant>,
    pub band_fit_retention: Option<BandFitRetention>,
    pub start_over: Option<StartOverPolicy>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: QuizOptions) -> QuizOptions {
        if let Some(flow) = self.flow {
            options = options.with_flow(flow);
        }
        if let Some(retention) = self.band_fit_retention {
            options = options.with_band_fit_retention(retention);
        }
        if let Some(policy) = self.start_over {
            options = options.with_start_over(policy);
        }
        options
    }
}
