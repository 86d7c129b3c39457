use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
#[error("mail delivery failed: {0}")]
pub struct MailError(pub String);

/// Transport for the welcome message sent when a user account is created.
///
/// Implementations must be safe to call from a detached task; delivery
/// failures are logged by the dispatcher and never reach the request path.
#[async_trait]
pub trait WelcomeMailer: Send + Sync {
    async fn send_welcome(&self, email: &str) -> Result<(), MailError>;
}

/// Default transport: records the send in the log instead of speaking SMTP.
pub struct LogMailer;

#[async_trait]
impl WelcomeMailer for LogMailer {
    async fn send_welcome(&self, email: &str) -> Result<(), MailError> {
        let mail = &config::config().mail;
        tracing::info!(
            "mail send to {} (from {}, subject {:?})",
            email,
            mail.from_address,
            mail.subject
        );
        Ok(())
    }
}

/// Fire-and-forget dispatch. The HTTP response is produced without waiting
/// for this task, and a delivery failure only makes it into the log.
pub fn dispatch_welcome(mailer: Arc<dyn WelcomeMailer>, email: String) {
    tokio::spawn(async move {
        if let Err(err) = mailer.send_welcome(&email).await {
            tracing::warn!("welcome mail to {} not delivered: {}", email, err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingMailer {
        sent: AtomicUsize,
    }

    #[async_trait]
    impl WelcomeMailer for CountingMailer {
        async fn send_welcome(&self, _email: &str) -> Result<(), MailError> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl WelcomeMailer for FailingMailer {
        async fn send_welcome(&self, _email: &str) -> Result<(), MailError> {
            Err(MailError("smtp refused".to_string()))
        }
    }

    #[tokio::test]
    async fn dispatch_runs_in_background() {
        let mailer = Arc::new(CountingMailer {
            sent: AtomicUsize::new(0),
        });
        dispatch_welcome(mailer.clone(), "hr@example.com".to_string());
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_swallows_failures() {
        // Must not panic or propagate anywhere.
        dispatch_welcome(Arc::new(FailingMailer), "hr@example.com".to_string());
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}
