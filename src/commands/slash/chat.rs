//! # Chat Command
//!
//! Send a message to the Oracle, answered with the channel's recent history as context.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use super::{option_type, ApplicationCommand, CommandOption};

pub fn create_commands() -> Vec<ApplicationCommand> {
    vec![create_chat_command()]
}

fn create_chat_command() -> ApplicationCommand {
    ApplicationCommand {
        name: "chat",
        description: "Sends a message to the Oracle.",
        default_member_permissions: None,
        options: vec![CommandOption {
            option_type: option_type::STRING,
            name: "message",
            description: "The message to send.",
            required: true,
        }],
    }
}
