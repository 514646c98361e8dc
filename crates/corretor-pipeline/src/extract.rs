//! Score and explanation extraction from free-form model responses.
//!
//! Responses are anchored by the marker phrase
//! `Pontuação - Competência <N>: `. The grammar is: first match of the
//! marker followed by an integer or decimal number yields the score
//! (truncated toward zero); everything after the *last* occurrence of the
//! marker, number included, is the explanation. Both parts have explicit
//! fallbacks, so extraction is total and can never abort a run.

use std::sync::OnceLock;

use corretor_core::Competency;
use regex::Regex;

/// Result of parsing one model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The parsed score, 0 when no number followed the marker.
    pub score: u32,
    /// Text after the last marker occurrence; empty when the marker is
    /// absent.
    pub explanation: String,
    /// Whether a numeric score was actually found.
    pub matched: bool,
}

fn score_pattern(competency: Competency) -> &'static Regex {
    static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        std::array::from_fn(|i| {
            Regex::new(&format!(
                r"Pontuação - Competência {}:\s*(\d+(?:\.\d+)?)",
                i + 1
            ))
            .expect("score pattern compiles")
        })
    });
    &patterns[usize::from(competency.ordinal()) - 1]
}

fn marker(competency: Competency) -> String {
    format!("Pontuação - Competência {}: ", competency.ordinal())
}

/// Parses a model response into a score and explanation for the given
/// competency. Never fails: a missing marker or missing number degrades
/// to a zero score and an empty (or partial) explanation.
pub fn extract_score_and_explanation(content: &str, competency: Competency) -> Extraction {
    let marker = marker(competency);
    let explanation = content
        .rfind(&marker)
        .map(|at| content[at + marker.len()..].to_string())
        .unwrap_or_default();

    let parsed = score_pattern(competency)
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    Extraction {
        // Float-to-int casts saturate, so absurdly large numbers stay in
        // range here and get clamped by the evaluator.
        score: parsed.map(|value| value.trunc() as u32).unwrap_or(0),
        explanation,
        matched: parsed.is_some(),
    }
}
