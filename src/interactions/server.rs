//! Axum router for `POST /api/interactions`
//!
//! The body is taken as raw bytes: the signature covers the exact bytes Discord
//! sent, so verification runs before any JSON parsing.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::rejection::Rejection;
use super::types::{Interaction, InteractionResponse};
use super::verify::SignatureVerifier;
use crate::commands::CommandDispatcher;

#[derive(Clone)]
pub struct AppState {
    verifier: Arc<SignatureVerifier>,
    dispatcher: CommandDispatcher,
}

impl AppState {
    pub fn new(verifier: SignatureVerifier, dispatcher: CommandDispatcher) -> Self {
        Self {
            verifier: Arc::new(verifier),
            dispatcher,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/interactions", post(handle_interaction))
        .with_state(state)
}

async fn health() -> &'static str {
    "Oracle interactions endpoint is running"
}

async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, Rejection> {
    if !state.verifier.verify_request(&headers, &body) {
        warn!("Rejected interaction with missing or invalid signature");
        return Err(Rejection::InvalidSignature);
    }

    let interaction: Interaction = serde_json::from_slice(&body).map_err(|e| {
        warn!("Signed request body is not an interaction: {e}");
        Rejection::InvalidBody
    })?;

    let request_id = Uuid::new_v4();
    debug!(
        "[{request_id}] Interaction {} (type {})",
        interaction.id, interaction.interaction_type
    );

    // The handler task keeps running after this response is sent
    let dispatched = state.dispatcher.dispatch(interaction, request_id)?;
    Ok(Json(dispatched.response))
}
