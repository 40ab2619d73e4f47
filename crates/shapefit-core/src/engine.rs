//! Quiz engine.
//!
//! [`QuizEngine`] owns the state of one quiz session and applies the moves
//! decided by [`crate::transition`]. Every operation validates before it
//! mutates, so a rejected request leaves step, path, answers and calculated
//! size exactly as they were.
//!
//! The engine is plain owned data. Create one per session; nothing is shared
//! between instances.

use serde::Serialize;
use shapefit_model::{
    Answer, AnswerSet, BandFit, BandFitRetention, Measurement, ModelError, Path, QuizOptions,
    Shape, SizeChart, Step,
};
use tracing::{debug, info, warn};

use crate::error::{QuizError, Result};
use crate::matcher::{NoMatch, find_match};
use crate::transition::{self, StartOver};

/// Snapshot of a quiz session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizState {
    step: Step,
    path: Option<Path>,
    answers: AnswerSet,
    calculated_size: Option<String>,
}

impl QuizState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn path(&self) -> Option<Path> {
        self.path
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn calculated_size(&self) -> Option<&str> {
        self.calculated_size.as_deref()
    }

    /// True for the state a new session starts in.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// State machine for one quiz session.
#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    state: QuizState,
    options: QuizOptions,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: QuizOptions) -> Self {
        Self {
            state: QuizState::default(),
            options,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn options(&self) -> &QuizOptions {
        &self.options
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn path(&self) -> Option<Path> {
        self.state.path
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    pub fn calculated_size(&self) -> Option<&str> {
        self.state.calculated_size()
    }

    /// Forward moves currently allowed by the transition table.
    pub fn available_targets(&self) -> Vec<Step> {
        transition::forward_targets(self.state.step, self.state.path, &self.options)
    }

    /// Target of [`QuizEngine::go_back`] from the current step.
    pub fn back_target(&self) -> Option<Step> {
        transition::back_target(self.state.step, self.state.path, &self.options)
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Choose a path at the hub and move to its entry step.
    ///
    /// Prior answers are kept so a user who backed out to the hub can
    /// re-enter.
    pub fn choose_path(&mut self, path: Path) -> Result<Step> {
        self.ensure_live()?;
        if self.state.step != Step::Hub {
            return Err(self.not_available("choose path"));
        }
        let target = transition::entry_step(path, &self.options);
        if let Some(previous) = self.state.path.filter(|previous| *previous != path) {
            debug!(%previous, %path, "path re-chosen at hub");
        }
        self.state.path = Some(path);
        self.move_to(target);
        Ok(target)
    }

    /// Validate and store a raw answer. The step is unchanged.
    pub fn record_answer(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_live()?;
        let answer = Answer::parse(key, value)?;
        self.store_answer(answer);
        Ok(())
    }

    /// Store an answer, overwriting any earlier answer to the same question.
    pub fn record(&mut self, answer: Answer) -> Result<()> {
        self.ensure_live()?;
        self.store_answer(answer);
        Ok(())
    }

    pub fn set_calculated_size(&mut self, size: Option<String>) -> Result<()> {
        self.ensure_live()?;
        self.state.calculated_size = size;
        Ok(())
    }

    /// Move forward to `target` if the transition table allows it.
    pub fn advance(&mut self, target: Step) -> Result<()> {
        self.ensure_allowed(target)?;
        self.move_to(target);
        Ok(())
    }

    /// Take the back action of the current step.
    pub fn go_back(&mut self) -> Result<Step> {
        self.ensure_live()?;
        let target = self
            .back_target()
            .ok_or_else(|| self.not_available("back"))?;
        self.move_to(target);
        Ok(target)
    }

    /// Reset the session to its initial state.
    pub fn restart(&mut self) {
        debug!(from = %self.state.step, "quiz restarted");
        self.state = QuizState::default();
    }

    // =========================================================================
    // Step actions
    // =========================================================================

    /// Match `measurement` against `chart`, store the result and show it.
    ///
    /// A measurement that fits no size still advances; the result step then
    /// reports "no match" and offers re-entry.
    pub fn submit_measurement(
        &mut self,
        measurement: Measurement,
        chart: &SizeChart,
    ) -> Result<Option<&str>> {
        self.ensure_allowed(Step::SizeResult)?;
        if self.state.step != Step::SizeCalculator {
            return Err(self.not_available("submit measurement"));
        }
        if !measurement.is_valid() {
            return Err(ModelError::InvalidMeasurement {
                underband: measurement.underband,
                overbust: measurement.overbust,
            }
            .into());
        }
        if measurement.unit != chart.unit {
            return Err(QuizError::UnitMismatch {
                measurement: measurement.unit,
                chart: chart.unit,
            });
        }

        let size = match find_match(
            measurement.underband,
            measurement.overbust,
            chart.entries(),
            measurement.unit,
        ) {
            Ok(found) => {
                info!(size = found.size(), "size matched");
                Some(found.size().to_string())
            }
            Err(NoMatch::OutOfTolerance { size, distance, .. }) => {
                info!(nearest = %size, distance, "no size within tolerance");
                None
            }
            Err(reason) => {
                info!(%reason, "no size matched");
                None
            }
        };
        self.state.calculated_size = size;
        self.move_to(Step::SizeResult);
        Ok(self.calculated_size())
    }

    /// Answer the legacy band fit question and move on.
    pub fn answer_band_fit(&mut self, fit: BandFit) -> Result<Step> {
        self.ensure_live()?;
        if self.state.step != Step::BandFit {
            return Err(self.not_available("band fit answer"));
        }
        let target = self
            .available_targets()
            .first()
            .copied()
            .ok_or_else(|| self.not_available("band fit answer"))?;
        self.store_answer(Answer::BandFit(fit));
        self.move_to(target);
        Ok(target)
    }

    /// Record the selected shape and show the results.
    pub fn select_shape(&mut self, shape: Shape) -> Result<()> {
        self.ensure_allowed(Step::Results)?;
        self.store_answer(Answer::Shape(shape));
        self.move_to(Step::Results);
        Ok(())
    }

    /// "Continue to Style Finder" from the size result.
    pub fn continue_to_style(&mut self) -> Result<()> {
        if self.state.step != Step::SizeResult {
            self.ensure_live()?;
            return Err(self.not_available("continue to style"));
        }
        self.ensure_allowed(Step::ShapeSelect)?;
        if self.options.band_fit_retention == BandFitRetention::Discard
            && self.state.answers.discard_band_fit().is_some()
        {
            debug!("band fit answer discarded");
        }
        self.move_to(Step::ShapeSelect);
        Ok(())
    }

    /// "Start Over" from a result step.
    pub fn start_over(&mut self) -> Result<Step> {
        self.ensure_live()?;
        match transition::start_over(self.state.step, self.state.path, &self.options) {
            Some(StartOver::Remeasure(target)) => {
                self.state.calculated_size = None;
                self.move_to(target);
                Ok(target)
            }
            Some(StartOver::Restart) => {
                self.restart();
                Ok(Step::Hub)
            }
            None => Err(self.not_available("start over")),
        }
    }

    /// Put the engine on a step named by an external tag.
    ///
    /// A known tag must name the current step, one of its forward targets or
    /// its back target. Unknown tags land on [`Step::Error`], which only a
    /// restart leaves.
    pub fn resume_at(&mut self, tag: &str) -> Result<Step> {
        self.ensure_live()?;
        let step = Step::from_tag_lossy(tag);
        if step == Step::Error {
            warn!(tag, "unknown step tag; entering error state");
        } else if step != self.state.step && self.back_target() != Some(step) {
            self.ensure_allowed(step)?;
        }
        self.move_to(step);
        Ok(step)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn ensure_live(&self) -> Result<()> {
        if self.state.step == Step::Error {
            warn!("operation rejected in error state");
            return Err(QuizError::Terminal);
        }
        Ok(())
    }

    fn ensure_allowed(&self, target: Step) -> Result<()> {
        self.ensure_live()?;
        let QuizState { step, path, .. } = self.state;
        if transition::is_allowed(step, target, path, &self.options) {
            return Ok(());
        }
        warn!(from = %step, to = %target, "invalid transition rejected");
        Err(QuizError::InvalidTransition {
            from: step,
            to: target,
            path,
        })
    }

    fn not_available(&self, action: &'static str) -> QuizError {
        warn!(step = %self.state.step, action, "action not available");
        QuizError::NotAvailable {
            from: self.state.step,
            action,
        }
    }

    fn store_answer(&mut self, answer: Answer) {
        debug!(question = %answer.key(), answer = answer.as_str(), "answer recorded");
        self.state.answers.insert(answer);
    }

    fn move_to(&mut self, target: Step) {
        debug!(from = %self.state.step, to = %target, "step transition");
        self.state.step = target;
    }
}
