use std::sync::Arc;
use crate::repositories::user::UserStore;
use crate::utils::config::{CountingMode, PasswordStorage};
use crate::utils::mailer::Notifier;

/// Everything a handler needs, built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn UserStore>,
    pub notifier: Arc<dyn Notifier>,
    pub counting: CountingMode,
    pub password_storage: PasswordStorage,
}
