//! Usage metrics for grading runs. Observability only: logged at the end
//! of a run, never part of the grading result.

use corretor_core::Competency;
use corretor_llm::GenerationMetrics;

/// Metrics from a single competency step.
#[derive(Debug, Clone)]
pub struct StepMetrics {
    pub competency: Competency,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

impl StepMetrics {
    pub(crate) fn from_generation(competency: Competency, metrics: &GenerationMetrics) -> Self {
        Self {
            competency,
            input_tokens: metrics.input_tokens,
            output_tokens: metrics.output_tokens,
            elapsed_ms: metrics.elapsed_ms,
        }
    }
}

/// Aggregated metrics for one full run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub total_input_tokens: u32,
    pub total_output_tokens: u32,
    pub total_elapsed_ms: u64,
    pub steps: Vec<StepMetrics>,
}

impl RunMetrics {
    pub fn record(&mut self, step: StepMetrics) {
        self.total_input_tokens += step.input_tokens;
        self.total_output_tokens += step.output_tokens;
        self.total_elapsed_ms += step.elapsed_ms;
        self.steps.push(step);
    }

    pub fn total_tokens(&self) -> u32 {
        self.total_input_tokens + self.total_output_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_across_steps() {
        let mut run = RunMetrics::default();
        run.record(StepMetrics {
            competency: Competency::FormalWriting,
            input_tokens: 100,
            output_tokens: 50,
            elapsed_ms: 200,
        });
        run.record(StepMetrics {
            competency: Competency::Comprehension,
            input_tokens: 150,
            output_tokens: 75,
            elapsed_ms: 300,
        });

        assert_eq!(run.total_input_tokens, 250);
        assert_eq!(run.total_output_tokens, 125);
        assert_eq!(run.total_tokens(), 375);
        assert_eq!(run.total_elapsed_ms, 500);
        assert_eq!(run.steps.len(), 2);
    }
}
