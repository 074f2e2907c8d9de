use axum::http::HeaderValue;
use axum::{Extension, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use crate::context::AppContext;
use crate::routes::health::register_health_routes;
use crate::routes::users::register_user_routes;

pub fn init_routes(ctx: AppContext, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(register_health_routes())
        .merge(register_user_routes())
        .layer(Extension(ctx))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    // Credentials rule out wildcards, so methods and headers are mirrored instead.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
