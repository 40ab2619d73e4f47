//! CLI argument definitions for the ShapeFit quiz.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use shapefit_model::{BandFitRetention, FlowVariant, StartOverPolicy, Unit};

#[derive(Parser)]
#[command(
    name = "shapefit",
    version,
    about = "ShapeFit - fit quiz and size calculator",
    long_about = "Find a size from underband and overbust measurements, browse the\n\
                  size charts, or walk through the fit quiz interactively."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up the size for a pair of measurements.
    Match(MatchArgs),

    /// Print a size chart.
    Chart(ChartArgs),

    /// Take the fit quiz interactively on stdin.
    Quiz(QuizArgs),
}

/// Which size chart to use.
#[derive(Args)]
pub struct ChartSource {
    /// Measurement unit.
    #[arg(long = "unit", value_enum, default_value = "in")]
    pub unit: UnitArg,

    /// Size chart file (CSV or JSON) instead of the bundled chart.
    #[arg(long = "chart", value_name = "PATH")]
    pub chart: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Measurement just under the bust.
    #[arg(long = "underband", value_name = "VALUE")]
    pub underband: f64,

    /// Measurement over the fullest part of the bust.
    #[arg(long = "overbust", value_name = "VALUE")]
    pub overbust: f64,

    #[command(flatten)]
    pub source: ChartSource,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub source: ChartSource,
}

#[derive(Args)]
pub struct QuizArgs {
    #[command(flatten)]
    pub source: ChartSource,

    /// TOML file with a [quiz] options table.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Transition table to follow on the size branch.
    #[arg(long = "flow", value_enum)]
    pub flow: Option<FlowArg>,

    /// Keep or drop the band fit answer when continuing to the style finder.
    #[arg(long = "band-fit-retention", value_enum)]
    pub band_fit_retention: Option<RetentionArg>,

    /// Where "start over" leads from a result step.
    #[arg(long = "start-over", value_enum)]
    pub start_over: Option<StartOverArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    #[value(alias = "inches")]
    In,
    #[value(alias = "centimeters")]
    Cm,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::In => Unit::Inches,
            UnitArg::Cm => Unit::Centimeters,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FlowArg {
    Measured,
    BandFit,
}

impl From<FlowArg> for FlowVariant {
    fn from(value: FlowArg) -> Self {
        match value {
            FlowArg::Measured => FlowVariant::Measured,
            FlowArg::BandFit => FlowVariant::BandFitLegacy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RetentionArg {
    Keep,
    Discard,
}

impl From<RetentionArg> for BandFitRetention {
    fn from(value: RetentionArg) -> Self {
        match value {
            RetentionArg::Keep => BandFitRetention::Keep,
            RetentionArg::Discard => BandFitRetention::Discard,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StartOverArg {
    Remeasure,
    Restart,
}

impl From<StartOverArg> for StartOverPolicy {
    fn from(value: StartOverArg) -> Self {
        match value {
            StartOverArg::Remeasure => StartOverPolicy::Remeasure,
            StartOverArg::Restart => StartOverPolicy::Restart,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
