//! Environment-driven configuration
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: `DiscordConfig` for the registration tool, which needs no generation key
//! - 1.1.0: Single source of truth for the application id (shared by bot and registration tool)
//! - 1.0.0: Initial release

use anyhow::{anyhow, Context, Result};
use std::env;

/// Application id of the Oracle bot. Discord uses the same snowflake for the bot user.
pub const DEFAULT_APPLICATION_ID: &str = "1399372941980078220";

/// Ed25519 public key from the Discord developer portal (hex encoded)
pub const DEFAULT_PUBLIC_KEY: &str =
    "5db1dafd742e74f1c413a9682a43586e420049b3570f09e6d3bcc27190cdca58";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HISTORY_LIMIT: u8 = 10;
pub const DEFAULT_PORT: u16 = 3000;

/// Which hosted language model backs `/chat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationProvider {
    Gemini,
    OpenAi,
}

impl GenerationProvider {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            other => Err(anyhow!(
                "Unknown GENERATION_PROVIDER '{other}' (expected 'gemini' or 'openai')"
            )),
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => DEFAULT_GEMINI_MODEL,
            Self::OpenAi => DEFAULT_OPENAI_MODEL,
        }
    }
}

/// REST key-value store connection (Upstash / Vercel KV protocol)
#[derive(Debug, Clone)]
pub struct KvConfig {
    pub url: String,
    pub token: String,
}

/// Settings needed to talk to Discord's REST API, nothing more
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordConfig {
    pub token: String,
    pub application_id: String,
}

impl DiscordConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .ok_or_else(|| anyhow!("DISCORD_TOKEN must be set in the environment"))?;
        Ok(Self {
            token,
            application_id: lookup("DISCORD_APPLICATION_ID")
                .unwrap_or_else(|| DEFAULT_APPLICATION_ID.to_string()),
        })
    }
}

/// `LOG_LEVEL`, used as env_logger's default filter
pub fn log_level_from_env() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: String,
    pub public_key: String,
    pub generation_provider: GenerationProvider,
    pub generation_api_key: String,
    pub generation_model: String,
    pub kv: Option<KvConfig>,
    pub history_limit: u8,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let discord = DiscordConfig::from_env()?;

        let generation_provider = match env::var("GENERATION_PROVIDER") {
            Ok(value) => GenerationProvider::parse(&value)?,
            Err(_) => GenerationProvider::Gemini,
        };

        let generation_api_key = match generation_provider {
            GenerationProvider::Gemini => env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY must be set when GENERATION_PROVIDER=gemini")?,
            GenerationProvider::OpenAi => env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set when GENERATION_PROVIDER=openai")?,
        };

        let generation_model = env::var("GENERATION_MODEL")
            .unwrap_or_else(|_| generation_provider.default_model().to_string());

        let kv = match (env::var("KV_REST_API_URL"), env::var("KV_REST_API_TOKEN")) {
            (Ok(url), Ok(token)) => Some(KvConfig {
                url: url.trim_end_matches('/').to_string(),
                token,
            }),
            _ => None,
        };

        let history_limit = match env::var("HISTORY_LIMIT") {
            Ok(value) => parse_history_limit(&value)?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT '{value}' is not a valid port number"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            discord_token: discord.token,
            application_id: discord.application_id,
            public_key: env::var("DISCORD_PUBLIC_KEY")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_KEY.to_string()),
            generation_provider,
            generation_api_key,
            generation_model,
            kv,
            history_limit,
            port,
            log_level: log_level_from_env(),
        })
    }
}

/// Discord caps `GET /channels/{id}/messages` at 100 per page
fn parse_history_limit(value: &str) -> Result<u8> {
    let limit = value
        .parse::<u8>()
        .with_context(|| format!("HISTORY_LIMIT '{value}' is not a number between 1 and 100"))?;
    if limit == 0 || limit > 100 {
        return Err(anyhow!(
            "HISTORY_LIMIT must be between 1 and 100, got {limit}"
        ));
    }
    Ok(limit)
}
