use serde::Serialize;
use crate::models::user::User;

#[derive(Debug, Serialize)]
pub struct RegisterSuccess {
    pub message: String,
    pub user: User,
    pub total_users: i64,
}

impl RegisterSuccess {
    pub fn new(user: User, total_users: i64) -> Self {
        RegisterSuccess {
            message: "User registered successfully".to_string(),
            user,
            total_users,
        }
    }
}
