//! # Core Module
//!
//! Configuration and shared Discord message utilities.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add response module with Discord message chunking utilities
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod response;

pub use config::{log_level_from_env, Config, DiscordConfig, GenerationProvider, KvConfig};
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
