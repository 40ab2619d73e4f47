//! Quiz state machine and nearest-fit size matching for ShapeFit.

pub mod engine;
pub mod error;
pub mod matcher;
pub mod transition;

pub use engine::{QuizEngine, QuizState};
pub use error::{QuizError, Result};
pub use matcher::{NoMatch, SizeMatch, find_match, match_size};
pub use transition::{StartOver, back_target, entry_step, forward_targets, is_allowed};
