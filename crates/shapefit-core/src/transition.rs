//! Quiz transition table.
//!
//! Pure functions deciding which step may follow the current one. Nothing
//! here mutates state; [`crate::engine::QuizEngine`] consults these before
//! applying a move so a rejected request never touches the session.
//!
//! Forward moves (`M` is the measurement entry step, see
//! [`measurement_step`]):
//!
//! | From | Path | To |
//! |---|---|---|
//! | SizeCalculator | any | SizeResult |
//! | BandFit | Size | SizeResult |
//! | BandFit | Style / Full | ShapeSelect |
//! | SizeResult | Size | M |
//! | SizeResult | other | ShapeSelect, M |
//! | ShapeSelect | any | Results |
//! | Results | Size / Full | M |
//!
//! The hub is left through [`entry_step`] and re-entered only through a
//! back move or a restart.

use shapefit_model::{FlowVariant, Path, QuizOptions, StartOverPolicy, Step};

/// First step of the measurement branch for the configured flow.
pub fn measurement_step(options: &QuizOptions) -> Step {
    match options.flow {
        FlowVariant::Measured => Step::SizeCalculator,
        FlowVariant::BandFitLegacy => Step::BandFit,
    }
}

/// Step entered when `path` is chosen at the hub.
pub fn entry_step(path: Path, options: &QuizOptions) -> Step {
    match path {
        Path::Style => Step::ShapeSelect,
        Path::Size | Path::Full => measurement_step(options),
    }
}

/// Steps reachable by a forward move from `step`.
pub fn forward_targets(step: Step, path: Option<Path>, options: &QuizOptions) -> Vec<Step> {
    let remeasure = measurement_step(options);
    match step {
        Step::Hub | Step::Error => Vec::new(),
        Step::SizeCalculator => vec![Step::SizeResult],
        Step::BandFit => match path {
            Some(Path::Size) => vec![Step::SizeResult],
            Some(_) => vec![Step::ShapeSelect],
            None => Vec::new(),
        },
        Step::SizeResult => match path {
            Some(Path::Size) => vec![remeasure],
            _ => vec![Step::ShapeSelect, remeasure],
        },
        Step::ShapeSelect => vec![Step::Results],
        Step::Results => match path {
            Some(Path::Size | Path::Full) => vec![remeasure],
            _ => Vec::new(),
        },
    }
}

/// Whether a forward move from `from` to `to` is in the table.
pub fn is_allowed(from: Step, to: Step, path: Option<Path>, options: &QuizOptions) -> bool {
    forward_targets(from, path, options).contains(&to)
}

/// Target of the back action, if the step offers one.
pub fn back_target(step: Step, path: Option<Path>, options: &QuizOptions) -> Option<Step> {
    match step {
        Step::ShapeSelect => match path {
            Some(Path::Style) | None => Some(Step::Hub),
            Some(_) => Some(measurement_step(options)),
        },
        Step::SizeCalculator | Step::BandFit => Some(Step::Hub),
        Step::SizeResult => Some(measurement_step(options)),
        Step::Hub | Step::Results | Step::Error => None,
    }
}

/// Outcome of "start over" on a result step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOver {
    /// Go back to the measurement entry step, keeping the path.
    Remeasure(Step),
    /// Reset the whole session.
    Restart,
}

/// Resolve "start over" for `step`; `None` when the step does not offer it.
pub fn start_over(step: Step, path: Option<Path>, options: &QuizOptions) -> Option<StartOver> {
    if !matches!(step, Step::SizeResult | Step::Results) {
        return None;
    }
    let remeasure = measurement_step(options);
    match (options.start_over, path) {
        (StartOverPolicy::Remeasure, Some(path)) if path.measures() => {
            Some(StartOver::Remeasure(remeasure))
        }
        _ => Some(StartOver::Restart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured() -> QuizOptions {
        QuizOptions::default()
    }

    #[test]
    fn entry_steps_follow_path() {
        let options = measured();
        assert_eq!(entry_step(Path::Style, &options), Step::ShapeSelect);
        assert_eq!(entry_step(Path::Size, &options), Step::SizeCalculator);
        assert_eq!(entry_step(Path::Full, &options), Step::SizeCalculator);

        let legacy = QuizOptions::legacy();
        assert_eq!(entry_step(Path::Size, &legacy), Step::BandFit);
        assert_eq!(entry_step(Path::Style, &legacy), Step::ShapeSelect);
    }

    #[test]
    fn size_result_continues_only_off_the_size_path() {
        let options = measured();
        assert!(!is_allowed(
            Step::SizeResult,
            Step::ShapeSelect,
            Some(Path::Size),
            &options
        ));
        assert!(is_allowed(
            Step::SizeResult,
            Step::ShapeSelect,
            Some(Path::Full),
            &options
        ));
        assert!(is_allowed(
            Step::SizeResult,
            Step::SizeCalculator,
            Some(Path::Size),
            &options
        ));
    }

    #[test]
    fn band_fit_branches_on_path() {
        let legacy = QuizOptions::legacy();
        assert_eq!(
            forward_targets(Step::BandFit, Some(Path::Size), &legacy),
            vec![Step::SizeResult]
        );
        assert_eq!(
            forward_targets(Step::BandFit, Some(Path::Full), &legacy),
            vec![Step::ShapeSelect]
        );
    }

    #[test]
    fn shape_select_back_depends_on_path() {
        let options = measured();
        assert_eq!(
            back_target(Step::ShapeSelect, Some(Path::Style), &options),
            Some(Step::Hub)
        );
        assert_eq!(
            back_target(Step::ShapeSelect, Some(Path::Full), &options),
            Some(Step::SizeCalculator)
        );
        assert_eq!(
            back_target(Step::ShapeSelect, Some(Path::Full), &QuizOptions::legacy()),
            Some(Step::BandFit)
        );
    }

    #[test]
    fn terminal_steps_have_no_moves() {
        let options = measured();
        assert!(forward_targets(Step::Error, Some(Path::Full), &options).is_empty());
        assert!(forward_targets(Step::Results, Some(Path::Style), &options).is_empty());
        assert_eq!(back_target(Step::Error, Some(Path::Full), &options), None);
        assert_eq!(back_target(Step::Results, Some(Path::Full), &options), None);
    }

    #[test]
    fn start_over_resolves_per_policy() {
        let options = measured();
        assert_eq!(
            start_over(Step::Results, Some(Path::Full), &options),
            Some(StartOver::Remeasure(Step::SizeCalculator))
        );
        assert_eq!(
            start_over(Step::Results, Some(Path::Style), &options),
            Some(StartOver::Restart)
        );
        assert_eq!(
            start_over(Step::SizeResult, Some(Path::Size), &QuizOptions::legacy()),
            Some(StartOver::Restart)
        );
        assert_eq!(start_over(Step::ShapeSelect, Some(Path::Full), &options), None);
    }
}
