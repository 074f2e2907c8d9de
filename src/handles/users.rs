use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use validator::Validate;
use crate::context::AppContext;
use crate::models::user::User;
use crate::params::requests::user::RegisterParams;
use crate::params::responses::user::RegisterSuccess;
use crate::services::users::list_service::ListService;
use crate::services::users::register_service::RegisterService;
use crate::utils::error::AppError;

pub async fn register(
    Extension(ctx): Extension<AppContext>,
    payload: Result<Json<RegisterParams>, JsonRejection>,
) -> Result<Json<RegisterSuccess>, AppError> {
    let Json(params) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    if let Err(e) = params.validate() {
        return Err(AppError::Validation(format!("Validation failed: {}", e)));
    }

    let result = RegisterService::register(&ctx, params).await?;
    Ok(Json(result))
}

pub async fn list(Extension(ctx): Extension<AppContext>) -> Result<Json<Vec<User>>, AppError> {
    let users = ListService::all(&ctx).await?;
    Ok(Json(users))
}
