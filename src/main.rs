use signup_service::context::AppContext;
use signup_service::init::{init_config, init_logging, init_routes, init_schema};
use signup_service::repositories::user::PgUserStore;
use signup_service::utils;
use signup_service::utils::mailer::{Notifier, SmtpNotifier, UnconfiguredNotifier};
use std::sync::Arc;
use tokio::signal;
use tracing::{event, warn, Level};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = init_config()?;

    let log_guard = init_logging(&config.logging);
    event!(Level::INFO, "config initialized");

    let pool = utils::postgres::connect_lazy(&config.database)?;
    let store = Arc::new(PgUserStore::new(pool.clone(), config.database.acquire_timeout));
    init_schema(store.as_ref(), config.schema_policy).await?;

    let notifier: Arc<dyn Notifier> = match &config.mail {
        Some(mail) => match SmtpNotifier::new(mail) {
            Ok(notifier) => Arc::new(notifier),
            Err(e) => {
                warn!("Mail transport unusable, notifications will fail: {}", e);
                Arc::new(UnconfiguredNotifier::new(e.to_string()))
            }
        },
        None => {
            warn!("EMAIL_* settings incomplete, notifications will fail");
            Arc::new(UnconfiguredNotifier::new("EMAIL_HOST, EMAIL_USER, EMAIL_PASSWORD and EMAIL_TO are required"))
        }
    };

    let ctx = AppContext {
        store,
        notifier,
        counting: config.counting,
        password_storage: config.password_storage,
    };
    let app = init_routes(ctx, &config.cors_origins);

    event!(Level::INFO, "Application started at {}", config.bind);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    event!(Level::INFO, "Application shutdown");

    drop(log_guard);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    warn!("Shutdown signal received");
}
