//! Text-generation boundary for the grading pipeline.
//!
//! The pipeline talks to the external model through the [`TextGenerator`]
//! trait so the orchestration core can be exercised with a scripted stub
//! in tests. The production implementation is [`OpenAiGenerator`].

mod openai;

pub use openai::OpenAiGenerator;

use async_trait::async_trait;
use corretor_core::GraderError;

/// Token usage and latency for a single generation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationMetrics {
    /// Input tokens consumed, when the provider reports usage.
    pub input_tokens: u32,
    /// Output tokens generated, when the provider reports usage.
    pub output_tokens: u32,
    /// Wall-clock time for the request in milliseconds.
    pub elapsed_ms: u64,
}

/// A complete (non-streaming) response from the model.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The full response text.
    pub content: String,
    /// Usage metrics for the call.
    pub metrics: GenerationMetrics,
}

/// Capability to turn an instruction and an input text into a response.
///
/// One call maps to exactly one synchronous request against the backing
/// service. Implementations must be shareable across steps.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a single request and returns the complete response.
    async fn generate(&self, instructions: &str, input: &str) -> Result<Generation, GraderError>;
}
