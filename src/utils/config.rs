use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use dotenv::dotenv;
use std::str::FromStr;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Upper bound on how long a request waits for a pooled connection. The pool keeps
/// retrying refused connects until this runs out, so it is also how long an
/// unreachable store takes to answer 503.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

const DEFAULT_CORS_ORIGINS: &str = "https://your-frontend-domain.com,http://localhost:5173";

pub fn init() {
    INIT.call_once(|| {
        dotenv().ok();
    });
}

/// What to do when the users table cannot be provisioned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaInitPolicy {
    Warn,
    Fail,
}

/// How a registration derives the total it reports and notifies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingMode {
    /// Insert, then count in a separate statement. Concurrent registrations can
    /// interleave between the two, so a tenth-user boundary may be missed or seen twice.
    TwoStep,
    /// Insert and count inside one transaction holding a self-conflicting table lock.
    Atomic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStorage {
    /// Stored and echoed exactly as submitted.
    Plaintext,
    Argon2,
}

impl FromStr for SchemaInitPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(SchemaInitPolicy::Warn),
            "fail" => Ok(SchemaInitPolicy::Fail),
            other => Err(anyhow!("unknown SCHEMA_INIT_POLICY: {}", other)),
        }
    }
}

impl FromStr for CountingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two_step" => Ok(CountingMode::TwoStep),
            "atomic" => Ok(CountingMode::Atomic),
            other => Err(anyhow!("unknown REGISTRATION_COUNTING: {}", other)),
        }
    }
}

impl FromStr for PasswordStorage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" => Ok(PasswordStorage::Plaintext),
            "argon2" => Ok(PasswordStorage::Argon2),
            other => Err(anyhow!("unknown PASSWORD_STORAGE: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Host part of the connection string, safe to log.
    pub fn display_host(&self) -> &str {
        match self.url.rsplit_once('@') {
            Some((_, host)) => host,
            None => "unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_prefix: String,
    pub level: String,
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub recipient: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind: String,
    pub logging: LoggingConfig,
    pub cors_origins: Vec<String>,
    pub mail: Option<MailConfig>,
    pub schema_policy: SchemaInitPolicy,
    pub counting: CountingMode,
    pub password_storage: PasswordStorage,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, anyhow::Error> {
        init();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = var("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL not found in environment variables"))?;
        let max_connections: u32 = var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "15".to_string())
            .parse()
            .context("invalid DATABASE_MAX_CONNECTIONS")?;
        let acquire_timeout = var("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse()
            .map(Duration::from_secs)
            .context("invalid DATABASE_ACQUIRE_TIMEOUT_SECS")?;

        let timezone_name = var("TIMEZONE").unwrap_or_else(|| "UTC".to_string());
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|e| anyhow!("invalid TIMEZONE {}: {}", timezone_name, e))?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let mail = match (var("EMAIL_HOST"), var("EMAIL_USER"), var("EMAIL_PASSWORD"), var("EMAIL_TO")) {
            (Some(host), Some(user), Some(password), Some(recipient)) => {
                let port: u16 = var("EMAIL_PORT")
                    .unwrap_or_else(|| "465".to_string())
                    .parse()
                    .context("invalid EMAIL_PORT")?;
                Some(MailConfig { host, port, user, password, recipient })
            }
            _ => None,
        };

        Ok(AppConfig {
            database: DatabaseConfig { url, max_connections, acquire_timeout },
            bind: var("BIND").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            logging: LoggingConfig {
                directory: var("LOG_PATH").unwrap_or_else(|| "./logs".to_string()),
                file_prefix: var("LOG_FILEPATH_PREFIX").unwrap_or_else(|| "log.json".to_string()),
                level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                timezone,
            },
            cors_origins,
            mail,
            schema_policy: var("SCHEMA_INIT_POLICY").as_deref().unwrap_or("warn").parse()?,
            counting: var("REGISTRATION_COUNTING").as_deref().unwrap_or("two_step").parse()?,
            password_storage: var("PASSWORD_STORAGE").as_deref().unwrap_or("plaintext").parse()?,
        })
    }
}
