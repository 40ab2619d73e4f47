pub mod answers;
pub mod chart;
pub mod error;
pub mod measurement;
pub mod options;
pub mod step;

pub use answers::{Answer, AnswerSet, BandFit, QuestionKey, Shape};
pub use chart::{SizeChart, SizeChartEntry};
pub use error::{ModelError, Result};
pub use measurement::{Measurement, Unit, is_positive};
pub use options::{BandFitRetention, FlowVariant, QuizOptions, StartOverPolicy};
pub use step::{Path, Step};
