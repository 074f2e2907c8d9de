use anyhow::anyhow;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{error, info};
use crate::utils::config::MailConfig;

const SUBJECT: &str = "New Users Signup Notification";

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_user_total(&self, total: i64) -> Result<(), anyhow::Error>;
}

/// Sends the user-total notification and swallows any failure. Awaited in-line by
/// the caller, there is no retry or queueing.
pub async fn notify_user_total(notifier: &dyn Notifier, total: i64) {
    match notifier.send_user_total(total).await {
        Ok(_) => info!(total, "Email notification sent"),
        Err(e) => error!(total, "Email failed: {:#}", e),
    }
}

pub fn compose(from: &str, to: &str, total: i64) -> Result<Message, anyhow::Error> {
    let from: Mailbox = from.parse()?;
    let to: Mailbox = to.parse()?;
    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(format!("There are now {} registered users.", total))?;
    Ok(message)
}

/// Submits over implicit TLS (SMTPS) and authenticates with the configured account.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    recipient: String,
}

impl SmtpNotifier {
    pub fn new(config: &MailConfig) -> Result<Self, anyhow::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.password.clone()))
            .build();
        Ok(SmtpNotifier {
            transport,
            from: config.user.clone(),
            recipient: config.recipient.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_user_total(&self, total: i64) -> Result<(), anyhow::Error> {
        let message = compose(&self.from, &self.recipient, total)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// Stands in when mail settings are missing or unusable; every send fails.
pub struct UnconfiguredNotifier {
    reason: String,
}

impl UnconfiguredNotifier {
    pub fn new(reason: impl Into<String>) -> Self {
        UnconfiguredNotifier { reason: reason.into() }
    }
}

#[async_trait]
impl Notifier for UnconfiguredNotifier {
    async fn send_user_total(&self, _total: i64) -> Result<(), anyhow::Error> {
        Err(anyhow!("mail is not configured: {}", self.reason))
    }
}

#[cfg(test)]
pub mod testing {
    use super::Notifier;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Remembers every total it was asked to send.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<i64>>,
    }

    impl RecordingNotifier {
        pub async fn sent(&self) -> Vec<i64> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_user_total(&self, total: i64) -> Result<(), anyhow::Error> {
            self.sent.lock().await.push(total);
            Ok(())
        }
    }

    /// Records the attempt, then fails like a rejected login would.
    #[derive(Default)]
    pub struct FailingNotifier {
        pub attempts: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send_user_total(&self, total: i64) -> Result<(), anyhow::Error> {
            self.attempts.lock().await.push(total);
            Err(anyhow!("535 authentication failed"))
        }
    }
}
