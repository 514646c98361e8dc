//! One grading step: build the prompt, call the model, record the score.

use corretor_core::{Competency, Evaluation, GraderError, MAX_COMPETENCY_SCORE};
use corretor_llm::TextGenerator;
use tracing::{info, warn};

use crate::extract::extract_score_and_explanation;
use crate::metrics::StepMetrics;
use crate::rubric;

/// Evaluates a single competency against the injected generator.
pub struct CompetencyEvaluator {
    competency: Competency,
}

impl CompetencyEvaluator {
    pub fn new(competency: Competency) -> Self {
        Self { competency }
    }

    /// Runs this step. Takes the record by value and returns the updated
    /// record plus the step's usage metrics.
    ///
    /// A response the extractor cannot score is absorbed here: the
    /// competency gets 0 and the run continues. Only a failure of the
    /// generation call itself propagates.
    pub async fn run<G>(
        &self,
        generator: &G,
        mut record: Evaluation,
    ) -> Result<(Evaluation, StepMetrics), GraderError>
    where
        G: TextGenerator + ?Sized,
    {
        let instructions = rubric::instructions(self.competency, &record.theme);
        let generation = generator.generate(&instructions, &record.essay).await?;

        let extraction = extract_score_and_explanation(&generation.content, self.competency);
        if !extraction.matched {
            warn!(
                competency = self.competency.label(),
                "no score marker in response, defaulting to 0"
            );
        }

        let score = extraction.score.min(u32::from(MAX_COMPETENCY_SCORE)) as u16;
        record.set_score(self.competency, score);

        if !extraction.explanation.is_empty() {
            record.score_explanation.push_str(&format!(
                "\n**Competência {}:** {}\n",
                self.competency.ordinal(),
                extraction.explanation
            ));
        }

        info!(
            competency = self.competency.label(),
            score,
            elapsed_ms = generation.metrics.elapsed_ms,
            "competency scored"
        );

        Ok((record, StepMetrics::from_generation(self.competency, &generation.metrics)))
    }
}
