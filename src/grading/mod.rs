//! Answer checking and scoring
//!
//! Normalization rules and attempt grading. Kept separate from the blanking
//! pipeline: generation needs none of this, and graders need nothing from
//! generation beyond the quiz record.

mod normalize;
mod score;

pub use normalize::{answers_equal, normalize};
pub use score::{GradeReport, GradedBlank, grade};
