//! Note summarization via the Gemini `generateContent` REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("model returned no text")]
    Empty,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, content: &str) -> Result<String, SummarizeError>;
}

pub fn prompt_for(content: &str) -> String {
    format!(
        "Summarize the following text in one or two sentences:\n\n{}",
        content
    )
}

// ── Gemini API types ────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Joined text of the first candidate
fn extract_text(resp: GenerateResponse) -> Result<String, SummarizeError> {
    let text = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(SummarizeError::Empty)
    } else {
        Ok(text)
    }
}

// ── Client impl ─────────────────────────────────────

pub struct GeminiSummarizer {
    api_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiSummarizer {
    pub fn new(api_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, content: &str) -> Result<String, SummarizeError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt_for(content)),
                }],
            }],
        };

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Http { status, body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        extract_text(parsed)
    }
}
