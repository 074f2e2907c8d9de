use crate::utils::config::AppConfig;

/// Loads `.env` and reads the process configuration. Runs before logging exists,
/// so failures are reported by the caller.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    AppConfig::from_env()
}
