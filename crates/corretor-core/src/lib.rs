//! Core domain types and error definitions for corretor.
//!
//! This crate provides the fundamental types shared across the corretor
//! workspace:
//!
//! - [`GraderError`] — Error type for pipeline and LLM operations
//! - [`Competency`] — The five fixed ENEM scoring dimensions
//! - [`Evaluation`] — The per-run record carrying scores and feedback
//!
//! # Example
//!
//! ```rust
//! use corretor_core::{Competency, Evaluation};
//!
//! let mut eval = Evaluation::new("A redação...", "Educação digital");
//! eval.set_score(Competency::FormalWriting, 160);
//! assert_eq!(eval.score(Competency::FormalWriting), 160);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum score a single competency can receive.
pub const MAX_COMPETENCY_SCORE: u16 = 200;

/// Errors that can occur while grading an essay.
#[derive(Error, Debug)]
pub enum GraderError {
    /// LLM API request failed. Fatal for the run: without a response
    /// there is nothing to score.
    #[error("LLM request failed: {0}")]
    Llm(String),

    /// The LLM returned a response the client could not unpack.
    #[error("Failed to parse LLM response: {0}")]
    Parse(String),
}

/// One of the five fixed ENEM scoring dimensions, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Competency {
    /// Competency 1: mastery of the formal written language.
    FormalWriting,
    /// Competency 2: comprehension of the proposal and the theme.
    Comprehension,
    /// Competency 3: selection and organization of arguments.
    ArgumentOrganization,
    /// Competency 4: linguistic mechanisms of argumentation.
    ArgumentationMechanisms,
    /// Competency 5: the intervention proposal.
    InterventionProposal,
}

impl Competency {
    /// All five competencies in the order the pipeline runs them.
    pub const ALL: [Competency; 5] = [
        Competency::FormalWriting,
        Competency::Comprehension,
        Competency::ArgumentOrganization,
        Competency::ArgumentationMechanisms,
        Competency::InterventionProposal,
    ];

    /// The 1-based ordinal used in the response marker phrase.
    pub fn ordinal(&self) -> u8 {
        match self {
            Competency::FormalWriting => 1,
            Competency::Comprehension => 2,
            Competency::ArgumentOrganization => 3,
            Competency::ArgumentationMechanisms => 4,
            Competency::InterventionProposal => 5,
        }
    }

    /// Human-readable label for logs and display.
    pub fn label(&self) -> &'static str {
        match self {
            Competency::FormalWriting => "Formal Writing Mastery",
            Competency::Comprehension => "Essay Comprehension",
            Competency::ArgumentOrganization => "Argument Organization",
            Competency::ArgumentationMechanisms => "Argumentation Mechanisms",
            Competency::InterventionProposal => "Intervention Proposal",
        }
    }

    /// Whether this competency's rubric needs the essay theme as context.
    /// Competencies 2 and 5 grade against the proposed theme; the others
    /// grade the text on its own.
    pub fn needs_theme(&self) -> bool {
        matches!(
            self,
            Competency::Comprehension | Competency::InterventionProposal
        )
    }
}

/// The record threaded through one grading run.
///
/// Created fresh per essay submission, filled in by the five competency
/// steps and the aggregator, returned to the caller, then discarded.
/// Score fields hold 0–200 each; `final_score` is their sum, 0–1000.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// The essay text under evaluation.
    pub essay: String,
    /// The proposed theme the essay must address.
    pub theme: String,
    /// Competency 1 score.
    pub formal_writing_mastery: u16,
    /// Competency 2 score.
    pub essay_comprehension: u16,
    /// Competency 3 score.
    pub argument_organization: u16,
    /// Competency 4 score.
    pub argumentation_mechanisms: u16,
    /// Competency 5 score.
    pub intervention_proposal: u16,
    /// Accumulated per-competency feedback, one labeled section per step.
    pub score_explanation: String,
    /// Sum of the five competency scores. Valid after aggregation.
    pub final_score: u16,
}

impl Evaluation {
    /// Creates an empty record for the given essay and theme.
    pub fn new(essay: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            essay: essay.into(),
            theme: theme.into(),
            formal_writing_mastery: 0,
            essay_comprehension: 0,
            argument_organization: 0,
            argumentation_mechanisms: 0,
            intervention_proposal: 0,
            score_explanation: String::new(),
            final_score: 0,
        }
    }

    /// Reads the score field for the given competency.
    pub fn score(&self, competency: Competency) -> u16 {
        match competency {
            Competency::FormalWriting => self.formal_writing_mastery,
            Competency::Comprehension => self.essay_comprehension,
            Competency::ArgumentOrganization => self.argument_organization,
            Competency::ArgumentationMechanisms => self.argumentation_mechanisms,
            Competency::InterventionProposal => self.intervention_proposal,
        }
    }

    /// Writes the score field for the given competency.
    pub fn set_score(&mut self, competency: Competency, score: u16) {
        let slot = match competency {
            Competency::FormalWriting => &mut self.formal_writing_mastery,
            Competency::Comprehension => &mut self.essay_comprehension,
            Competency::ArgumentOrganization => &mut self.argument_organization,
            Competency::ArgumentationMechanisms => &mut self.argumentation_mechanisms,
            Competency::InterventionProposal => &mut self.intervention_proposal,
        };
        *slot = score;
    }

    /// Sum of the five competency scores.
    pub fn competency_total(&self) -> u16 {
        Competency::ALL.iter().map(|c| self.score(*c)).sum()
    }
}
