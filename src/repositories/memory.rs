use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::{Barrier, Mutex};
use crate::models::user::User;
use crate::repositories::user::{UserSession, UserStore};

/// In-process stand-in for Postgres. Flip `set_available(false)` to make every
/// call fail the way a refused connection does.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
    unavailable: Arc<AtomicBool>,
    after_insert: Option<Arc<Barrier>>,
}

impl MemoryUserStore {
    /// Every plain `insert_user` waits on `barrier` once its row is in, so that
    /// concurrent sessions all insert before any of them counts.
    pub fn with_insert_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.after_insert = Some(barrier);
        self
    }

    pub async fn seed(&self, count: usize) {
        let mut users = self.users.lock().await;
        for _ in 0..count {
            let id = users.len() as i32 + 1;
            users.push(User {
                id,
                username: format!("seed{}", id),
                password: "seed".to_string(),
            });
        }
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
            return Err(sqlx::Error::Io(refused));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn session(&self) -> Result<Box<dyn UserSession>, sqlx::Error> {
        self.check()?;
        Ok(Box::new(self.clone()))
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        self.check()
    }
}

#[async_trait]
impl UserSession for MemoryUserStore {
    async fn insert_user(&mut self, username: &str, password: &str) -> Result<User, sqlx::Error> {
        self.check()?;
        let user = {
            let mut users = self.users.lock().await;
            let user = User {
                id: users.len() as i32 + 1,
                username: username.to_string(),
                password: password.to_string(),
            };
            users.push(user.clone());
            user
        };
        if let Some(barrier) = &self.after_insert {
            barrier.wait().await;
        }
        Ok(user)
    }

    async fn count_users(&mut self) -> Result<i64, sqlx::Error> {
        self.check()?;
        Ok(self.users.lock().await.len() as i64)
    }

    async fn insert_user_counted(&mut self, username: &str, password: &str) -> Result<(User, i64), sqlx::Error> {
        self.check()?;
        let mut users = self.users.lock().await;
        let user = User {
            id: users.len() as i32 + 1,
            username: username.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        Ok((user, users.len() as i64))
    }

    async fn list_users(&mut self) -> Result<Vec<User>, sqlx::Error> {
        self.check()?;
        Ok(self.users.lock().await.clone())
    }

    async fn ping(&mut self) -> Result<(), sqlx::Error> {
        self.check()
    }
}
