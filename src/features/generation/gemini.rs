//! Gemini `generateContent` client
//!
//! The API key travels in the `x-goog-api-key` header, never in the URL.
//!
//! - **Version**: 1.0.1
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.1: Configurable API base URL
//! - 1.0.0: Initial release

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ResponseGenerator;
use crate::features::conversation::{Role, TranscriptEntry};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Content {
    role: Role,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Clone)]
pub struct GeminiGenerator {
    http: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_base: API_BASE.to_string(),
            api_key,
            model,
        }
    }

    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Prior turns followed by the new message, with consecutive turns of the same
/// role merged and leading model turns dropped (Gemini expects a user turn first).
fn build_contents(history: &[TranscriptEntry], message: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = Vec::with_capacity(history.len() + 1);
    let turns = history
        .iter()
        .map(|e| (e.role, e.text.as_str()))
        .chain(std::iter::once((Role::User, message)));

    for (role, text) in turns {
        if contents.is_empty() && role == Role::Model {
            continue;
        }
        match contents.last_mut() {
            Some(last) if last.role == role => last.parts.push(Part {
                text: text.to_string(),
            }),
            _ => contents.push(Content {
                role,
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
        }
    }
    contents
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Gemini returned no candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(anyhow!(
            "Gemini returned an empty candidate (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ));
    }
    Ok(text.trim().to_string())
}

#[async_trait]
impl ResponseGenerator for GeminiGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[TranscriptEntry],
        message: &str,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: build_contents(history, message),
        };
        debug!(
            "Sending {} turns to Gemini model {}",
            request.contents.len(),
            self.model
        );

        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(anyhow!("Gemini API returned {status}: {detail}"));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;
        extract_text(parsed)
    }
}
