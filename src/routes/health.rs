use axum::routing::{get, Router};
use crate::handles::health::{health, root};

pub fn register_health_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
