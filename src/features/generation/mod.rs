//! # Feature: Response Generation
//!
//! Sends a persona instruction, the channel transcript and the new message to a
//! hosted language model and returns the reply text.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: OpenAI chat completions as an alternative provider
//! - 1.0.0: Initial release with Gemini

pub mod gemini;
pub mod openai;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::core::{Config, GenerationProvider};
use crate::features::conversation::TranscriptEntry;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate a reply to `message`, given prior turns oldest-first
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[TranscriptEntry],
        message: &str,
    ) -> Result<String>;
}

/// Build the generator selected by `GENERATION_PROVIDER`
pub fn create_generator(config: &Config) -> Arc<dyn ResponseGenerator> {
    match config.generation_provider {
        GenerationProvider::Gemini => Arc::new(GeminiGenerator::new(
            config.generation_api_key.clone(),
            config.generation_model.clone(),
        )),
        GenerationProvider::OpenAi => {
            Arc::new(OpenAiGenerator::new(config.generation_model.clone()))
        }
    }
}
