//! Orchestration core of the grader.
//!
//! One grading run walks a fixed linear sequence: the five competency
//! evaluators, in rubric order, then final-score aggregation. Each step
//! takes the [`corretor_core::Evaluation`] record by value and returns an
//! updated record, so no step ever observes a later step's writes.

mod evaluator;
mod extract;
mod metrics;
mod rubric;
mod runner;

pub use evaluator::CompetencyEvaluator;
pub use extract::{extract_score_and_explanation, Extraction};
pub use metrics::{RunMetrics, StepMetrics};
pub use runner::{aggregate, EssayPipeline};
