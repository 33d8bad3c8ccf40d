//! Terminal HTTP responses for interactions that are not dispatched

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Missing or invalid Ed25519 signature
    InvalidSignature,
    /// Signed, but not an interaction payload
    InvalidBody,
    UnknownCommand,
    UnsupportedInteraction,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidSignature => "Bad request signature",
            Self::InvalidBody => "Invalid request body",
            Self::UnknownCommand => "Unknown command",
            Self::UnsupportedInteraction => "Unsupported interaction type",
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSignature => (StatusCode::UNAUTHORIZED, self.message()).into_response(),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.message() })),
            )
                .into_response(),
        }
    }
}
