//! # Slash Commands (/)
//!
//! Application command definitions pushed to Discord by `register-commands`,
//! plus option accessors for incoming command data.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Serialize definitions directly to Discord's JSON for bulk overwrite
//! - 1.0.0: Initial release with /setup and /chat

mod chat;
mod setup;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::discord::DiscordApi;
use crate::interactions::CommandDataOption;

/// Application command option `type` values
pub mod option_type {
    pub const STRING: u8 = 3;
}

/// Permission bit for Administrator
pub const ADMINISTRATOR_PERMISSION: u64 = 1 << 3;

/// A global `CHAT_INPUT` command as accepted by `PUT /applications/{id}/commands`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationCommand {
    pub name: &'static str,
    pub description: &'static str,
    /// Permission bitset serialized as a string; members lacking it don't see the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub option_type: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<ApplicationCommand> {
    let mut commands = Vec::new();
    commands.extend(setup::create_commands());
    commands.extend(chat::create_commands());
    commands
}

/// Names of the commands `create_slash_commands` defines, in registration order
pub fn slash_command_names() -> Vec<&'static str> {
    create_slash_commands().iter().map(|c| c.name).collect()
}

/// Replaces the application's global commands with the definitions above
pub async fn register_global_commands(discord: &dyn DiscordApi) -> Result<()> {
    let commands = create_slash_commands();
    discord.bulk_overwrite_global_commands(&commands).await?;
    info!(
        "Global slash commands registered successfully ({} commands)",
        commands.len()
    );
    Ok(())
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
