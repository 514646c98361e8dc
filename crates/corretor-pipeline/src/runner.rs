//! The grading pipeline: five competency steps in fixed order, then
//! final-score aggregation. Strictly linear, no branching, no retries.

use corretor_core::{Competency, Evaluation, GraderError};
use corretor_llm::TextGenerator;
use tracing::info;

use crate::evaluator::CompetencyEvaluator;
use crate::metrics::RunMetrics;

/// Sequences one grading run over the injected generator.
///
/// Callers are expected to hand in a non-empty essay and theme; the
/// surrounding boundary validates before the pipeline is invoked.
pub struct EssayPipeline<G> {
    generator: G,
}

impl<G: TextGenerator> EssayPipeline<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The generator this pipeline runs against.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Grades the essay: one generator call per competency, in ordinal
    /// order, each step handing its record forward, then aggregation.
    pub async fn evaluate(&self, essay: &str, theme: &str) -> Result<Evaluation, GraderError> {
        info!(essay_chars = essay.len(), theme, "starting grading run");

        let mut record = Evaluation::new(essay, theme);
        let mut metrics = RunMetrics::default();

        for competency in Competency::ALL {
            let step = CompetencyEvaluator::new(competency);
            let (next, step_metrics) = step.run(&self.generator, record).await?;
            record = next;
            metrics.record(step_metrics);
        }

        let record = aggregate(record);

        info!(
            final_score = record.final_score,
            total_tokens = metrics.total_tokens(),
            total_elapsed_ms = metrics.total_elapsed_ms,
            "grading run complete"
        );

        Ok(record)
    }
}

/// Sets `final_score` to the sum of the five competency scores. With each
/// score capped at 200 the sum stays within 0–1000.
pub fn aggregate(mut record: Evaluation) -> Evaluation {
    record.final_score = record.competency_total();
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_sums_all_five_fields() {
        let mut record = Evaluation::new("texto", "tema");
        for competency in Competency::ALL {
            record.set_score(competency, 120);
        }
        let record = aggregate(record);
        assert_eq!(record.final_score, 600);
    }

    #[test]
    fn aggregate_of_untouched_record_is_zero() {
        let record = aggregate(Evaluation::new("texto", "tema"));
        assert_eq!(record.final_score, 0);
    }
}
