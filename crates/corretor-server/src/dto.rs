use corretor_core::Evaluation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub essay: String,
    pub theme: String,
}

/// The externally visible grading result: the five competency scores,
/// the accumulated feedback, and the final grade.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub formal_writing_mastery: u16,
    pub essay_comprehension: u16,
    pub argument_organization: u16,
    pub argumentation_mechanisms: u16,
    pub intervention_proposal: u16,
    pub score_explanation: String,
    pub final_score: u16,
}

impl From<Evaluation> for EvaluateResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            formal_writing_mastery: evaluation.formal_writing_mastery,
            essay_comprehension: evaluation.essay_comprehension,
            argument_organization: evaluation.argument_organization,
            argumentation_mechanisms: evaluation.argumentation_mechanisms,
            intervention_proposal: evaluation.intervention_proposal,
            score_explanation: evaluation.score_explanation,
            final_score: evaluation.final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corretor_core::Competency;

    #[test]
    fn response_mirrors_the_evaluation() {
        let mut evaluation = Evaluation::new("texto", "tema");
        for competency in Competency::ALL {
            evaluation.set_score(competency, 100);
        }
        evaluation.final_score = 500;
        evaluation.score_explanation = "feedback".into();

        let response = EvaluateResponse::from(evaluation);
        assert_eq!(response.final_score, 500);
        assert_eq!(response.argument_organization, 100);
        assert_eq!(response.score_explanation, "feedback");
    }

    #[test]
    fn response_serializes_with_the_published_field_names() {
        let mut evaluation = Evaluation::new("texto", "tema");
        evaluation.set_score(Competency::FormalWriting, 180);
        evaluation.final_score = 180;

        let json = serde_json::to_value(EvaluateResponse::from(evaluation)).unwrap();
        assert_eq!(json["formal_writing_mastery"], 180);
        assert_eq!(json["final_score"], 180);
        assert!(json.get("essay").is_none());
        assert!(json.get("theme").is_none());
    }
}
