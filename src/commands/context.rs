//! Shared context for command handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Configurable history limit
//! - 1.0.0: Initial implementation with core shared state

use std::sync::Arc;

use crate::core::config::DEFAULT_HISTORY_LIMIT;
use crate::discord::DiscordApi;
use crate::features::generation::ResponseGenerator;
use crate::features::restriction::RestrictionStore;

/// Shared context for all command handlers
///
/// Every external collaborator is injected here so handlers stay testable:
/// - DiscordApi for history and follow-ups
/// - ResponseGenerator for the language model
/// - RestrictionStore for the allowed-channel record
#[derive(Clone)]
pub struct CommandContext {
    pub discord: Arc<dyn DiscordApi>,
    pub generator: Arc<dyn ResponseGenerator>,
    pub restriction: RestrictionStore,
    /// Author id of the bot's own messages (equal to the application id)
    pub bot_user_id: String,
    pub history_limit: u8,
}

impl CommandContext {
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        generator: Arc<dyn ResponseGenerator>,
        restriction: RestrictionStore,
        bot_user_id: impl Into<String>,
    ) -> Self {
        Self {
            discord,
            generator,
            restriction,
            bot_user_id: bot_user_id.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_history_limit(mut self, limit: u8) -> Self {
        self.history_limit = limit;
        self
    }
}
