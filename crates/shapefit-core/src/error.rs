use shapefit_model::{ModelError, Path, Step, Unit};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error("cannot move from {from} to {to} on path {}", path_label(.path))]
    InvalidTransition {
        from: Step,
        to: Step,
        path: Option<Path>,
    },
    #[error("{action} is not available on step {from}")]
    NotAvailable { from: Step, action: &'static str },
    #[error("quiz is in the error state; restart to continue")]
    Terminal,
    #[error("measurement is in {measurement} but the size chart is in {chart}")]
    UnitMismatch { measurement: Unit, chart: Unit },
    #[error(transparent)]
    Model(#[from] ModelError),
}

fn path_label(path: &Option<Path>) -> &'static str {
    path.as_ref().map_or("unset", Path::as_str)
}

pub type Result<T> = std::result::Result<T, QuizError>;
