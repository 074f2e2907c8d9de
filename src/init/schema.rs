use anyhow::Context;
use tracing::{info, warn};
use crate::repositories::user::UserStore;
use crate::utils::config::SchemaInitPolicy;

pub async fn init_schema(store: &dyn UserStore, policy: SchemaInitPolicy) -> Result<(), anyhow::Error> {
    info!("Creating database tables...");
    match store.ensure_schema().await {
        Ok(_) => {
            info!("Database tables created/verified");
            Ok(())
        }
        Err(e) => match policy {
            SchemaInitPolicy::Warn => {
                warn!("Startup warning: failed to create tables: {}", e);
                Ok(())
            }
            SchemaInitPolicy::Fail => Err(e).context("failed to create tables"),
        },
    }
}
