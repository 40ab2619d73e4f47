//! Configuration options for the quiz engine.

use serde::{Deserialize, Serialize};

/// Which transition table the engine follows on the measurement branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowVariant {
    /// Size and Full paths enter the size calculator.
    #[default]
    Measured,
    /// Size and Full paths enter the band fit question instead.
    BandFitLegacy,
}

/// What happens to the band-fit answer on "continue to style finder".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandFitRetention {
    /// Carry the answer into the style recommendation.
    #[default]
    Keep,
    /// Drop the answer once the size result has been shown.
    Discard,
}

/// Target of "start over" on the result steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOverPolicy {
    /// Return to the measurement entry step, keeping path and answers.
    #[default]
    Remeasure,
    /// Full restart back to the hub.
    Restart,
}

/// Options controlling quiz behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizOptions {
    pub flow: FlowVariant,
    pub band_fit_retention: BandFitRetention,
    pub start_over: StartOverPolicy,
}

impl QuizOptions {
    /// Options reproducing the earlier band-fit flow.
    pub fn legacy() -> Self {
        Self {
            flow: FlowVariant::BandFitLegacy,
            start_over: StartOverPolicy::Restart,
            ..Self::default()
        }
    }

    pub fn with_flow(mut self, flow: FlowVariant) -> Self {
        self.flow = flow;
        self
    }

    pub fn with_band_fit_retention(mut self, retention: BandFitRetention) -> Self {
        self.band_fit_retention = retention;
        self
    }

    pub fn with_start_over(mut self, policy: StartOverPolicy) -> Self {
        self.start_over = policy;
        self
    }
}
