use axum::{
    routing::{get, post},
    Router,
};

use crate::handles::users::{list, register};

pub fn register_user_routes() -> Router {
    Router::new()
        .route("/login/", post(register))
        .route("/users/", get(list))
}
