use std::io;

use anyhow::{Context, Result};
use tracing::info;

use shapefit_cli::config::{OptionOverrides, load_quiz_options};
use shapefit_cli::session::run_session;
use shapefit_cli::summary::{chart_table, match_table, session_table};
use shapefit_core::{QuizEngine, find_match};
use shapefit_model::{SizeChart, Unit};
use shapefit_standards::{load_default_size_chart, load_size_chart};

use crate::cli::{ChartArgs, ChartSource, MatchArgs, QuizArgs};

fn load_chart(source: &ChartSource) -> Result<SizeChart> {
    let unit = Unit::from(source.unit);
    match &source.chart {
        Some(path) => load_size_chart(path, unit)
            .with_context(|| format!("load size chart {}", path.display())),
        None => load_default_size_chart(unit).context("load bundled size chart"),
    }
}

/// Returns whether a size was found.
pub fn run_match(args: &MatchArgs) -> Result<bool> {
    let chart = load_chart(&args.source)?;
    let outcome = find_match(args.underband, args.overbust, chart.entries(), chart.unit);
    println!(
        "{}",
        match_table(args.underband, args.overbust, chart.unit, &outcome)
    );
    Ok(outcome.is_ok())
}

pub fn run_chart(args: &ChartArgs) -> Result<()> {
    let chart = load_chart(&args.source)?;
    println!("{}", chart_table(&chart));
    Ok(())
}

pub fn run_quiz(args: &QuizArgs) -> Result<()> {
    let chart = load_chart(&args.source)?;
    let overrides = OptionOverrides {
        flow: args.flow.map(Into::into),
        band_fit_retention: args.band_fit_retention.map(Into::into),
        start_over: args.start_over.map(Into::into),
    };
    let options = overrides.apply(load_quiz_options(args.config.as_deref())?);
    info!(?options, unit = %chart.unit, "starting quiz");

    let mut engine = QuizEngine::with_options(options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let state = run_session(&mut engine, &chart, stdin.lock(), &mut stdout)?;
    println!();
    println!("{}", session_table(&state));
    Ok(())
}
