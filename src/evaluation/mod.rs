//! Tour length recomputation and structural validation.

mod evaluator;

pub use evaluator::{TourEvaluator, TourViolation};
