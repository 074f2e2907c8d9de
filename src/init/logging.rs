use chrono::Utc;
use chrono_tz::Tz;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;
use crate::utils::config::LoggingConfig;

/// Stamps each line with wall-clock time in the configured zone.
struct ZonedTimer {
    timezone: Tz,
}

impl FormatTime for ZonedTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&self.timezone);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Routes all events to a daily rolling file. The returned guard flushes buffered
/// lines when dropped, so it has to outlive the server.
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_timer(ZonedTimer { timezone: config.timezone })
        .with_env_filter(EnvFilter::new(&config.level))
        .with_writer(writer)
        .init();

    info!(level = %config.level, directory = %config.directory, "Logging initialized");

    guard
}
