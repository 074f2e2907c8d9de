use serde::Serialize;
use sqlx::FromRow;

/// A registered user. `password` holds whatever was stored for it and is
/// serialized back to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}
