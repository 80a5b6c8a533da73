//! REST API router and configuration.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::handlers::{
    create_entity_handler, delete_entity_handler, get_entity_handler, health_handler,
    list_entities_handler, update_entity_handler, ApiState,
};
use crate::storage::EntityStore;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Enable permissive CORS.
    pub enable_cors: bool,
    /// API prefix (e.g., "/api").
    pub prefix: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            prefix: "/api".to_string(),
        }
    }
}

/// Create the REST API router.
///
/// Endpoints:
/// - GET    /api/entities       - List entities (search, deceased, gender,
///   startDate, endDate, countries)
/// - POST   /api/entities       - Create an entity
/// - GET    /api/entities/:id   - Get an entity
/// - PUT    /api/entities/:id   - Replace an entity
/// - DELETE /api/entities/:id   - Delete an entity
/// - GET    /health             - Liveness probe
pub fn create_rest_router(store: Arc<dyn EntityStore>, config: &RestApiConfig) -> Router {
    let prefix = config.prefix.trim_end_matches('/');
    let state = Arc::new(ApiState::new(store, format!("{prefix}/entities")));

    let api_routes = Router::new()
        .route(
            "/entities",
            get(list_entities_handler).post(create_entity_handler),
        )
        .route(
            "/entities/:id",
            get(get_entity_handler)
                .put(update_entity_handler)
                .delete(delete_entity_handler),
        )
        .with_state(Arc::clone(&state));

    let health = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let api_routes = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };
    let router = api_routes
        .merge(health)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .expose_headers([header::LOCATION])
            .allow_origin(Any);

        router.layer(cors)
    } else {
        router
    }
}
