//! # Gadget HTTP Routes
//!
//! Handlers for the gadget lifecycle endpoints under `/api/v1`, plus the
//! unauthenticated token-issuing endpoint. Handlers stay thin: parse,
//! delegate to the service, shape the envelope. All failure shaping goes
//! through [`ApiError`](super::errors::ApiError).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth_gate::authenticate;
use super::errors::ApiError;
use crate::auth::JwtManager;
use crate::gadget::{
    Gadget, GadgetError, GadgetService, InMemoryGadgetRepository, UpdateGadgetRequest,
};

// ==================
// Shared State
// ==================

/// State shared across gadget handlers: the service and the token manager
pub struct GadgetState {
    pub service: GadgetService<InMemoryGadgetRepository>,
    pub jwt: JwtManager,
}

impl GadgetState {
    /// Create state with the given token manager and a fresh in-memory store
    pub fn new(jwt: JwtManager) -> Self {
        Self {
            service: GadgetService::new(InMemoryGadgetRepository::new()),
            jwt,
        }
    }
}

/// Gadget routes with shared state.
///
/// The auth gate is layered onto every route except token issuance.
pub fn gadget_routes(state: Arc<GadgetState>) -> Router {
    let protected = Router::new()
        .route("/gadgets", get(list_handler).post(create_handler))
        .route(
            "/gadgets/:id",
            patch(update_handler).delete(remove_handler),
        )
        .route("/gadgets/:id/self-destruct", post(self_destruct_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/gadgets/auth", get(auth_token_handler))
        .merge(protected)
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GadgetsResponse {
    pub gadgets: Vec<Gadget>,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub message: String,
    pub gadget: Gadget,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub message: String,
    #[serde(rename = "updatedGadget")]
    pub updated_gadget: Gadget,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SelfDestructResponse {
    pub message: String,
    pub code: u32,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ==================
// Handlers
// ==================

/// Parse a path id, folding malformed ids into the not-found case.
///
/// Ids are opaque to clients; an id that cannot name any record behaves
/// like an id that names none.
fn parse_gadget_id(id: &str) -> Result<Uuid, GadgetError> {
    Uuid::parse_str(id).map_err(|_| GadgetError::NotFound)
}

/// GET /gadgets/auth — issue a gate token (unauthenticated)
async fn auth_token_handler(
    State(state): State<Arc<GadgetState>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.jwt.issue_token()?;
    Ok(Json(TokenResponse { token }))
}

/// GET /gadgets — list, with an optional free-text status filter
async fn list_handler(
    State(state): State<Arc<GadgetState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GadgetsResponse>, ApiError> {
    let gadgets = state.service.list(query.status.as_deref())?;
    Ok(Json(GadgetsResponse { gadgets }))
}

/// POST /gadgets — create a gadget with a generated name
async fn create_handler(
    State(state): State<Arc<GadgetState>>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let gadget = state.service.create()?;
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: "gadget created successfully".to_string(),
            gadget,
        }),
    ))
}

/// PATCH /gadgets/:id — update name, and status when one is given
async fn update_handler(
    State(state): State<Arc<GadgetState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGadgetRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let id = parse_gadget_id(&id)?;
    let updated_gadget = state.service.update(id, &request)?;
    Ok(Json(UpdateResponse {
        message: "gadget updated successfully".to_string(),
        updated_gadget,
    }))
}

/// DELETE /gadgets/:id — soft-delete (status transition, no removal)
async fn remove_handler(
    State(state): State<Arc<GadgetState>>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, ApiError> {
    let id = parse_gadget_id(&id)?;
    state.service.decommission(id)?;
    Ok(Json(RemoveResponse {
        message: "gadget deleted successfully".to_string(),
    }))
}

/// POST /gadgets/:id/self-destruct — destroy and return a one-time code
async fn self_destruct_handler(
    State(state): State<Arc<GadgetState>>,
    Path(id): Path<String>,
) -> Result<Json<SelfDestructResponse>, ApiError> {
    let id = parse_gadget_id(&id)?;
    let code = state.service.self_destruct(id)?;
    Ok(Json(SelfDestructResponse {
        message: "self destruct sequence started".to_string(),
        code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;

    fn state() -> Arc<GadgetState> {
        Arc::new(GadgetState::new(JwtManager::new(JwtConfig::new(
            "test-secret-at-least-32-chars-long".to_string(),
        ))))
    }

    #[test]
    fn test_router_builds() {
        let _router = gadget_routes(state());
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        assert!(matches!(
            parse_gadget_id("not-a-uuid"),
            Err(GadgetError::NotFound)
        ));
    }

    #[test]
    fn test_well_formed_id_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_gadget_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_update_response_uses_camel_case_key() {
        let response = UpdateResponse {
            message: "gadget updated successfully".to_string(),
            updated_gadget: Gadget::new("Grappling Hook".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("updatedGadget").is_some());
    }
}
