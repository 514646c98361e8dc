//! OpenAI chat-completions client.

use async_trait::async_trait;
use corretor_core::GraderError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Generation, GenerationMetrics, TextGenerator};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

/// [`TextGenerator`] backed by the OpenAI chat completions API.
///
/// Reads `OPENAI_API_KEY` from the environment. Temperature is pinned to
/// zero so repeated runs over the same essay stay as stable as the model
/// allows.
pub struct OpenAiGenerator {
    client: Client,
    model: String,
    api_key: String,
    api_url: String,
}

impl OpenAiGenerator {
    /// Creates a client for the given model, optionally against a
    /// non-default API base (self-hosted or proxy endpoints).
    pub fn new(model: &str, api_base: Option<&str>) -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let api_url = match api_base {
            Some(base) => format!("{}/chat/completions", base.trim_end_matches('/')),
            None => OPENAI_API_URL.to_string(),
        };
        debug!(model, api_key_len = api_key.len(), "OpenAiGenerator configured");
        Self {
            client: Client::new(),
            model: model.to_string(),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, instructions: &str, input: &str) -> Result<Generation, GraderError> {
        let start = std::time::Instant::now();

        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: input.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GraderError::Llm(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GraderError::Llm(format!(
                "OpenAI API error {}: {}",
                status, body
            )));
        }

        let resp: ChatResponse = response
            .json()
            .await
            .map_err(|e| GraderError::Llm(e.to_string()))?;

        let (input_tokens, output_tokens) = resp
            .usage
            .map(|u| (u.prompt_tokens.unwrap_or(0), u.completion_tokens.unwrap_or(0)))
            .unwrap_or((0, 0));

        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GraderError::Parse("response carried no content".into()))?;

        let metrics = GenerationMetrics {
            input_tokens,
            output_tokens,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            model = %self.model,
            input_tokens,
            output_tokens,
            elapsed_ms = metrics.elapsed_ms,
            "chat completion finished"
        );

        Ok(Generation { content, metrics })
    }
}
