//! End-to-end pipeline tests against a scripted generator. No network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use corretor_core::{Competency, GraderError};
use corretor_llm::{Generation, GenerationMetrics, TextGenerator};
use corretor_pipeline::EssayPipeline;

/// Replays a fixed list of responses, one per generator call, and records
/// the prompts it was given.
struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn instructions_for_call(&self, index: usize) -> String {
        self.calls.lock().unwrap()[index].0.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, instructions: &str, input: &str) -> Result<Generation, GraderError> {
        self.calls
            .lock()
            .unwrap()
            .push((instructions.to_string(), input.to_string()));
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted");
        match next {
            Ok(content) => Ok(Generation {
                content,
                metrics: GenerationMetrics {
                    input_tokens: 10,
                    output_tokens: 5,
                    elapsed_ms: 1,
                },
            }),
            Err(message) => Err(GraderError::Llm(message)),
        }
    }
}

fn well_formed_script() -> Vec<Result<String, String>> {
    (1..=5)
        .map(|n| Ok(format!("Pontuação - Competência {n}: 150\nJustificativa: ok.")))
        .collect()
}

const ESSAY: &str = "A educação digital no Brasil exige políticas públicas consistentes.";
const THEME: &str = "Desafios da educação digital no Brasil";

#[tokio::test]
async fn full_run_scores_every_competency_and_sums() {
    let pipeline = EssayPipeline::new(ScriptedGenerator::new(well_formed_script()));
    let result = pipeline.evaluate(ESSAY, THEME).await.unwrap();

    assert_eq!(result.formal_writing_mastery, 150);
    assert_eq!(result.essay_comprehension, 150);
    assert_eq!(result.argument_organization, 150);
    assert_eq!(result.argumentation_mechanisms, 150);
    assert_eq!(result.intervention_proposal, 150);
    assert_eq!(result.final_score, 750);
    assert_eq!(result.essay, ESSAY);
    assert_eq!(result.theme, THEME);
}

#[tokio::test]
async fn explanation_sections_appear_in_pipeline_order() {
    let pipeline = EssayPipeline::new(ScriptedGenerator::new(well_formed_script()));
    let result = pipeline.evaluate(ESSAY, THEME).await.unwrap();

    let positions: Vec<usize> = (1..=5)
        .map(|n| {
            result
                .score_explanation
                .find(&format!("**Competência {n}:**"))
                .unwrap_or_else(|| panic!("missing section {n}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(result.score_explanation.matches("Justificativa: ok.").count(), 5);
}

#[tokio::test]
async fn malformed_response_zeroes_only_that_competency() {
    let mut script = well_formed_script();
    script[2] = Ok("A redação apresenta boa progressão, nota oitenta.".to_string());

    let pipeline = EssayPipeline::new(ScriptedGenerator::new(script));
    let result = pipeline.evaluate(ESSAY, THEME).await.unwrap();

    // Competency 3 lands in its own field, zeroed; the rest are untouched.
    assert_eq!(result.argument_organization, 0);
    assert_eq!(result.formal_writing_mastery, 150);
    assert_eq!(result.essay_comprehension, 150);
    assert_eq!(result.argumentation_mechanisms, 150);
    assert_eq!(result.intervention_proposal, 150);
    assert_eq!(result.final_score, 600);
    assert!(!result.score_explanation.contains("**Competência 3:**"));
}

#[tokio::test]
async fn out_of_range_scores_clamp_to_200() {
    let mut script = well_formed_script();
    script[0] = Ok("Pontuação - Competência 1: 999\nNota excessiva.".to_string());

    let pipeline = EssayPipeline::new(ScriptedGenerator::new(script));
    let result = pipeline.evaluate(ESSAY, THEME).await.unwrap();

    assert_eq!(result.formal_writing_mastery, 200);
    assert_eq!(result.final_score, 200 + 4 * 150);
}

#[tokio::test]
async fn decimal_scores_truncate_in_the_record() {
    let mut script = well_formed_script();
    script[4] = Ok("Pontuação - Competência 5: 180.9\nProposta detalhada.".to_string());

    let pipeline = EssayPipeline::new(ScriptedGenerator::new(script));
    let result = pipeline.evaluate(ESSAY, THEME).await.unwrap();

    assert_eq!(result.intervention_proposal, 180);
}

#[tokio::test]
async fn generator_failure_aborts_the_run() {
    let mut script = well_formed_script();
    script[1] = Err("connection reset".to_string());
    let generator = ScriptedGenerator::new(script);

    let pipeline = EssayPipeline::new(generator);
    let err = pipeline.evaluate(ESSAY, THEME).await.unwrap_err();

    assert!(matches!(err, GraderError::Llm(_)));
}

#[tokio::test]
async fn transport_failure_stops_remaining_steps() {
    let mut script = well_formed_script();
    script[1] = Err("timeout".to_string());

    let pipeline = EssayPipeline::new(ScriptedGenerator::new(script));
    let _ = pipeline.evaluate(ESSAY, THEME).await;

    assert_eq!(pipeline.generator().call_count(), 2);
}

#[tokio::test]
async fn theme_reaches_only_competencies_two_and_five() {
    let pipeline = EssayPipeline::new(ScriptedGenerator::new(well_formed_script()));
    pipeline.evaluate(ESSAY, THEME).await.unwrap();

    let generator = pipeline.generator();
    assert_eq!(generator.call_count(), 5);
    for (index, competency) in Competency::ALL.into_iter().enumerate() {
        let instructions = generator.instructions_for_call(index);
        assert_eq!(
            instructions.contains(THEME),
            competency.needs_theme(),
            "{:?}",
            competency
        );
    }
}
