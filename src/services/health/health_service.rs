use tracing::error;
use crate::context::AppContext;
use crate::params::responses::common::HealthStatus;

pub struct HealthService;

impl HealthService {
    pub async fn check(ctx: &AppContext) -> HealthStatus {
        let result = match ctx.store.session().await {
            Ok(mut session) => session.ping().await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => HealthStatus::Healthy,
            Err(e) => {
                error!("Health check failed: {}", e);
                HealthStatus::Unhealthy { error: e.to_string() }
            }
        }
    }
}
