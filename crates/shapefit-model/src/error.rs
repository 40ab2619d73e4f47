use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown quiz step: {0}")]
    UnknownStep(String),
    #[error("unknown quiz path: {0}")]
    UnknownPath(String),
    #[error("unknown measurement unit: {0}")]
    UnknownUnit(String),
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error("invalid answer {value:?} for question {question} (expected one of: {expected})")]
    UnknownAnswer {
        question: String,
        value: String,
        expected: String,
    },
    #[error("invalid measurement: underband={underband}, overbust={overbust}")]
    InvalidMeasurement { underband: f64, overbust: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
