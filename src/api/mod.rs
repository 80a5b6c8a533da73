//! HTTP surface for the entity store.

pub mod error;
pub mod handlers;
pub mod rest;

pub use error::{ApiError, ErrorResponse};
pub use handlers::ApiState;
pub use rest::{create_rest_router, RestApiConfig};
