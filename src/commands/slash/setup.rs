//! # Setup Command
//!
//! Administrator-only command that pins the bot to the invoking channel.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use super::{ApplicationCommand, ADMINISTRATOR_PERMISSION};

pub fn create_commands() -> Vec<ApplicationCommand> {
    vec![create_setup_command()]
}

fn create_setup_command() -> ApplicationCommand {
    ApplicationCommand {
        name: "setup",
        description: "Limits the bot's functionality to the current channel.",
        default_member_permissions: Some(ADMINISTRATOR_PERMISSION.to_string()),
        options: Vec::new(),
    }
}
