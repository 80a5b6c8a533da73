//! REST API request handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::entity::{Entity, EntityDraft, EntityId};
use crate::filter::EntityFilter;
use crate::storage::EntityStore;

/// Application state shared across handlers.
pub struct ApiState {
    /// Backing entity store.
    pub store: Arc<dyn EntityStore>,
    /// Path under which the entity collection is mounted, e.g. `/api/entities`.
    pub entities_path: String,
}

impl ApiState {
    /// Create new API state.
    pub fn new(store: Arc<dyn EntityStore>, entities_path: impl Into<String>) -> Self {
        Self {
            store,
            entities_path: entities_path.into(),
        }
    }

    fn location_of(&self, id: &EntityId) -> String {
        format!("{}/{}", self.entities_path, id)
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `ok` when the store answers.
    pub status: String,
    /// Number of stored entities.
    pub entities: usize,
}

fn not_found(id: &EntityId) -> ApiError {
    warn!(id = %id, "entity not found");
    ApiError::NotFound
}

/// GET /api/entities - List entities matching the query filters.
pub async fn list_entities_handler(
    State(state): State<Arc<ApiState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let filter = EntityFilter::from_query_pairs(pairs)?;
    debug!(?filter, "list entities");
    Ok(Json(state.store.list(&filter)?))
}

/// GET /api/entities/:id - Fetch one entity.
pub async fn get_entity_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Entity>, ApiError> {
    let id = EntityId::from(id);
    match state.store.get(&id)? {
        Some(entity) => Ok(Json(entity)),
        None => Err(not_found(&id)),
    }
}

/// POST /api/entities - Create an entity under a fresh id.
pub async fn create_entity_handler(
    State(state): State<Arc<ApiState>>,
    Json(draft): Json<EntityDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let entity = state.store.create(draft)?;
    let location = state.location_of(&entity.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entity),
    ))
}

/// PUT /api/entities/:id - Replace every field except the id.
pub async fn update_entity_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(draft): Json<EntityDraft>,
) -> Result<Json<Entity>, ApiError> {
    let id = EntityId::from(id);
    state
        .store
        .update(&id, draft)
        .map(Json)
        .map_err(|err| match ApiError::from(err) {
            ApiError::NotFound => not_found(&id),
            other => other,
        })
}

/// DELETE /api/entities/:id - Remove an entity.
pub async fn delete_entity_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = EntityId::from(id);
    state
        .store
        .delete(&id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|err| match ApiError::from(err) {
            ApiError::NotFound => not_found(&id),
            other => other,
        })
}

/// GET /health - Liveness probe with the current entity count.
pub async fn health_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        entities: state.store.len()?,
    }))
}
