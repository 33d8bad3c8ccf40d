//! # Interactions Endpoint
//!
//! HTTP surface Discord calls for every slash command: signature check, payload
//! parsing and the initial response.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

pub mod rejection;
pub mod server;
pub mod types;
pub mod verify;

pub use rejection::Rejection;
pub use server::{create_router, AppState};
pub use types::{
    CommandData, CommandDataOption, Interaction, InteractionKind, InteractionResponse,
    EPHEMERAL_FLAG,
};
pub use verify::SignatureVerifier;
