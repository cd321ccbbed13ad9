//! Password Card HTTP Routes
//!
//! Endpoints for the card collection and for single cards addressed by
//! identifier. Handlers translate requests into store operations and
//! store results into responses; every status code is written out
//! explicitly rather than relying on a transport default.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::debug;

use crate::store::{CardStore, PasswordCard};

use super::errors::{ApiError, ApiResult};

/// Create the card routes.
///
/// The item route uses a named `:id` parameter, so an empty identifier
/// segment can never reach a handler. Unsupported verbs on either path
/// fall through to the 405 handler.
pub fn card_routes(store: Arc<CardStore>) -> Router {
    Router::new()
        .route(
            "/password-cards",
            get(list_cards_handler)
                .post(create_card_handler)
                .fallback(invalid_method_handler),
        )
        .route(
            "/password-cards/:id",
            put(replace_card_handler)
                .delete(delete_card_handler)
                .fallback(invalid_method_handler),
        )
        .with_state(store)
}

/// List all cards. Empty store yields an empty JSON array.
async fn list_cards_handler(
    State(store): State<Arc<CardStore>>,
) -> (StatusCode, Json<Vec<PasswordCard>>) {
    (StatusCode::OK, Json(store.list()))
}

/// Create a card. The identifier in the payload, if any, is discarded;
/// the response carries the server-assigned one.
async fn create_card_handler(
    State(store): State<Arc<CardStore>>,
    body: Result<Json<PasswordCard>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PasswordCard>)> {
    let Json(card) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let stored = store.insert(card);
    debug!(id = %stored.id, "card created");
    Ok((StatusCode::OK, Json(stored)))
}

/// Replace the card under the path identifier wholly with the payload.
///
/// A decode failure or an absent identifier leaves the store untouched.
async fn replace_card_handler(
    State(store): State<Arc<CardStore>>,
    Path(id): Path<String>,
    body: Result<Json<PasswordCard>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PasswordCard>)> {
    let Json(card) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let updated = store.replace(&id, card)?;
    debug!(id = %updated.id, "card replaced");
    Ok((StatusCode::OK, Json(updated)))
}

/// Delete the card under the path identifier. Idempotent: an absent
/// identifier still answers 200 with an empty body.
async fn delete_card_handler(
    State(store): State<Arc<CardStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    store.delete(&id);
    debug!(id = %id, "card deleted");
    StatusCode::OK
}

/// Any verb without a dedicated handler on a known path.
async fn invalid_method_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
