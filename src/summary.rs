use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::MoviePublic;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Turns a prompt into generated text. The API only depends on this, so tests can
/// swap the network provider out.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, SummaryError>;
}

pub fn build_prompt(movie: &MoviePublic) -> String {
    let actor_list = movie.actor_names().collect::<Vec<_>>().join(", ");
    format!(
        "Generate a short, engaging summary for the movie '{}' ({}), \
         directed by {} and starring {}.",
        movie.title, movie.year, movie.director, actor_list
    )
}

/// Chat-completion client for Groq's OpenAI-compatible endpoint.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(client: reqwest::Client, api_key: String, api_url: String, model: String) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("GROQ_API_KEY is not set; summary requests will be rejected upstream");
        }
        Self { client, api_key, api_url, model }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl SummaryProvider for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, SummaryError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: prompt }],
        };

        let resp: ChatResponse = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        resp.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(SummaryError::EmptyResponse)
    }
}
