use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use crate::context::AppContext;
use crate::params::responses::common::{HealthStatus, MessageResponse};
use crate::services::health::health_service::HealthService;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("API is running"))
}

pub async fn health(Extension(ctx): Extension<AppContext>) -> (StatusCode, Json<HealthStatus>) {
    let status = HealthService::check(&ctx).await;
    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(status))
}
