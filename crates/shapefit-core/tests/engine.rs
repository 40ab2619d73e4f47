//! Tests for the quiz engine.

use shapefit_core::{QuizEngine, QuizError};
use shapefit_model::{
    Answer, BandFit, BandFitRetention, Measurement, Path, QuizOptions, Shape, SizeChart,
    SizeChartEntry, StartOverPolicy, Step, Unit,
};

fn inch_chart() -> SizeChart {
    SizeChart::new(
        Unit::Inches,
        vec![
            SizeChartEntry::new(34.0, 36.0, "34B"),
            SizeChartEntry::new(34.0, 39.0, "34D"),
            SizeChartEntry::new(36.0, 38.0, "36C"),
        ],
    )
}

fn inches(underband: f64, overbust: f64) -> Measurement {
    Measurement::new(underband, overbust, Unit::Inches).expect("valid measurement")
}

// ============================================================================
// Path selection
// ============================================================================

#[test]
fn style_path_enters_shape_select() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Style).unwrap();
    assert_eq!(engine.step(), Step::ShapeSelect);
    assert_eq!(engine.path(), Some(Path::Style));
}

#[test]
fn size_and_full_paths_enter_size_calculator() {
    for path in [Path::Size, Path::Full] {
        let mut engine = QuizEngine::new();
        engine.choose_path(path).unwrap();
        assert_eq!(engine.step(), Step::SizeCalculator);
    }
}

#[test]
fn choose_path_keeps_prior_answers() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Style).unwrap();
    engine.record(Answer::BandFit(BandFit::Tight)).unwrap();
    engine.go_back().unwrap();
    assert_eq!(engine.step(), Step::Hub);

    engine.choose_path(Path::Full).unwrap();
    assert_eq!(engine.path(), Some(Path::Full));
    assert_eq!(engine.answers().band_fit(), Some(BandFit::Tight));
}

// ============================================================================
// Full flows
// ============================================================================

#[test]
fn size_path_result_then_restart_clears_everything() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Size).unwrap();
    assert_eq!(engine.step(), Step::SizeCalculator);

    engine.set_calculated_size(Some("34D".to_string())).unwrap();
    engine.advance(Step::SizeResult).unwrap();
    assert_eq!(engine.step(), Step::SizeResult);
    assert_eq!(engine.calculated_size(), Some("34D"));

    engine.restart();
    assert_eq!(engine.step(), Step::Hub);
    assert_eq!(engine.path(), None);
    assert!(engine.answers().is_empty());
    assert_eq!(engine.calculated_size(), None);
}

#[test]
fn full_path_measures_then_picks_shape() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Full).unwrap();

    let size = engine
        .submit_measurement(inches(34.0, 39.5), &inch_chart())
        .unwrap();
    assert_eq!(size, Some("34D"));
    assert_eq!(engine.step(), Step::SizeResult);

    engine.continue_to_style().unwrap();
    assert_eq!(engine.step(), Step::ShapeSelect);

    engine.select_shape(Shape::Teardrop).unwrap();
    assert_eq!(engine.step(), Step::Results);
    assert_eq!(engine.answers().shape(), Some(Shape::Teardrop));
    assert_eq!(engine.calculated_size(), Some("34D"));

    insta::assert_json_snapshot!(engine.state(), @r#"
    {
      "step": "results",
      "path": "full",
      "answers": {
        "shape": "teardrop"
      },
      "calculated_size": "34D"
    }
    "#);
}

#[test]
fn no_match_still_reaches_result_step() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Size).unwrap();
    let size = engine
        .submit_measurement(inches(35.0, 50.0), &inch_chart())
        .unwrap();
    assert_eq!(size, None);
    assert_eq!(engine.step(), Step::SizeResult);

    assert_eq!(engine.start_over().unwrap(), Step::SizeCalculator);
    assert_eq!(engine.path(), Some(Path::Size));
}

#[test]
fn size_path_cannot_continue_to_style() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Size).unwrap();
    engine
        .submit_measurement(inches(34.0, 36.0), &inch_chart())
        .unwrap();

    let error = engine.continue_to_style().unwrap_err();
    assert!(matches!(error, QuizError::InvalidTransition { .. }));
    assert_eq!(engine.step(), Step::SizeResult);
}

#[test]
fn style_path_start_over_restarts() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Style).unwrap();
    engine.select_shape(Shape::Bell).unwrap();
    assert_eq!(engine.start_over().unwrap(), Step::Hub);
    assert!(engine.state().is_initial());
}

#[test]
fn restart_policy_applies_to_every_path() {
    let options = QuizOptions::default().with_start_over(StartOverPolicy::Restart);
    let mut engine = QuizEngine::with_options(options);
    engine.choose_path(Path::Full).unwrap();
    engine
        .submit_measurement(inches(34.0, 39.0), &inch_chart())
        .unwrap();
    assert_eq!(engine.start_over().unwrap(), Step::Hub);
    assert!(engine.state().is_initial());
}

// ============================================================================
// Back navigation
// ============================================================================

#[test]
fn shape_select_back_returns_to_entry_of_path() {
    let mut style = QuizEngine::new();
    style.choose_path(Path::Style).unwrap();
    assert_eq!(style.go_back().unwrap(), Step::Hub);

    let mut full = QuizEngine::new();
    full.choose_path(Path::Full).unwrap();
    full.submit_measurement(inches(34.0, 39.0), &inch_chart())
        .unwrap();
    full.continue_to_style().unwrap();
    assert_eq!(full.go_back().unwrap(), Step::SizeCalculator);
}

#[test]
fn results_have_no_back() {
    let mut engine = QuizEngine::new();
    engine.choose_path(Path::Style).unwrap();
    engine.select_shape(Shape::Round).unwrap();
    let error = engine.go_back().unwrap_err();
    assert_eq!(
        error,
        QuizError::NotAvailable {
            from: Step::Results,
            action: "back",
        }
    );
}

// ============================================================================
// Legacy band-fit flow
// ============================================================================

#[test]
fn legacy_size_path_goes_from_band_fit_to_result() {
    let mut engine = QuizEngine::with_options(QuizOptions::legacy());
    engine.choose_path(Path::Size).unwrap();
    assert_eq!(engine.step(), Step::BandFit);

    assert_eq!(engine.answer_band_fit(BandFit::Loose).unwrap(), Step::SizeResult);
    assert_eq!(engine.answers().band_fit(), Some(BandFit::Loose));
}

#[test]
fn legacy_full_path_goes_from_band_fit_to_shape() {
    let mut engine = QuizEngine::with_options(QuizOptions::legacy());
    engine.choose_path(Path::Full).unwrap();
    assert_eq!(engine.answer_band_fit(BandFit::Good).unwrap(), Step::ShapeSelect);
    assert_eq!(engine.go_back().unwrap(), Step::BandFit);
    assert_eq!(engine.go_back().unwrap(), Step::Hub);
}

#[test]
fn band_fit_retention_is_configurable() {
    let run = |retention: BandFitRetention| {
        let options = QuizOptions::default().with_band_fit_retention(retention);
        let mut engine = QuizEngine::with_options(options);
        engine.choose_path(Path::Full).unwrap();
        engine.record_answer("bandFit", "tight").unwrap();
        engine
            .submit_measurement(inches(34.0, 39.0), &inch_chart())
            .unwrap();
        engine.continue_to_style().unwrap();
        engine.answers().band_fit()
    };

    assert_eq!(run(BandFitRetention::Keep), Some(BandFit::Tight));
    assert_eq!(run(BandFitRetention::Discard), None);
}

// ============================================================================
// Answers and error state
// ============================================================================

#[test]
fn record_answer_rejects_unknown_keys_without_side_effects() {
    let mut engine = QuizEngine::new();
    assert!(engine.record_answer("cupSize", "d").is_err());
    assert!(engine.record_answer("shape", "oval").is_err());
    assert!(engine.answers().is_empty());

    engine.record_answer("shape", "slender").unwrap();
    engine.record_answer("shape", "bell").unwrap();
    assert_eq!(engine.answers().shape(), Some(Shape::Bell));
    assert_eq!(engine.step(), Step::Hub);
}

#[test]
fn unknown_step_tag_is_terminal_until_restart() {
    let mut engine = QuizEngine::new();
    engine.record_answer("shape", "round").unwrap();

    assert_eq!(engine.resume_at("checkout").unwrap(), Step::Error);
    assert_eq!(engine.choose_path(Path::Style), Err(QuizError::Terminal));
    assert_eq!(engine.go_back(), Err(QuizError::Terminal));
    assert_eq!(engine.advance(Step::Hub), Err(QuizError::Terminal));
    assert_eq!(engine.start_over(), Err(QuizError::Terminal));
    assert_eq!(engine.resume_at("results"), Err(QuizError::Terminal));
    assert_eq!(engine.step(), Step::Error);

    engine.restart();
    assert_eq!(engine.step(), Step::Hub);
}

#[test]
fn error_state_rejects_answers_and_sizes() {
    let mut engine = QuizEngine::new();
    engine.resume_at("checkout").unwrap();
    let before = engine.state().clone();

    assert_eq!(engine.record_answer("shape", "bell"), Err(QuizError::Terminal));
    assert_eq!(
        engine.record(Answer::BandFit(BandFit::Good)),
        Err(QuizError::Terminal)
    );
    assert_eq!(
        engine.set_calculated_size(Some("99Z".to_string())),
        Err(QuizError::Terminal)
    );
    assert_eq!(engine.state(), &before);
    assert!(engine.answers().is_empty());
    assert_eq!(engine.calculated_size(), None);
}

// ============================================================================
// Resuming from step tags
// ============================================================================

#[test]
fn resume_rejects_steps_outside_the_table() {
    let mut engine = QuizEngine::new();
    for tag in ["results", "shape_1", "size_results", "size_1", "size_calculator"] {
        let error = engine.resume_at(tag).unwrap_err();
        assert!(
            matches!(
                error,
                QuizError::InvalidTransition {
                    from: Step::Hub,
                    path: None,
                    ..
                }
            ),
            "{tag}: {error:?}"
        );
    }
    assert!(engine.state().is_initial());

    engine.choose_path(Path::Size).unwrap();
    let error = engine.resume_at("size_1").unwrap_err();
    assert_eq!(
        error,
        QuizError::InvalidTransition {
            from: Step::SizeCalculator,
            to: Step::BandFit,
            path: Some(Path::Size),
        }
    );
    assert_eq!(engine.step(), Step::SizeCalculator);
}

#[test]
fn resume_follows_forward_and_back_moves() {
    let mut engine = QuizEngine::with_options(QuizOptions::legacy());
    engine.choose_path(Path::Size).unwrap();
    assert_eq!(engine.resume_at("size_1").unwrap(), Step::BandFit);
    assert_eq!(engine.resume_at("size_results").unwrap(), Step::SizeResult);
    assert_eq!(
        engine.resume_at("shape_select"),
        Err(QuizError::InvalidTransition {
            from: Step::SizeResult,
            to: Step::ShapeSelect,
            path: Some(Path::Size),
        })
    );
    assert_eq!(engine.resume_at("band_fit").unwrap(), Step::BandFit);
    assert_eq!(engine.resume_at("hub").unwrap(), Step::Hub);
    assert_eq!(engine.path(), Some(Path::Size));
}
