//! Delivery of the finished report to an ntfy topic.

use std::env;

use thiserror::Error;
use tracing::debug;

/// Environment variable naming the destination topic.
pub const TOPIC_ENV: &str = "NTFY_TOPIC";

/// Notification title shown by subscribed clients.
pub const TITLE: &str = "Fail2Ban - Status";

const ENDPOINT: &str = "https://ntfy.sh";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("NTFY_TOPIC is not set; cannot deliver the report")]
    MissingTopic,
    #[error("failed to deliver notification: {0}")]
    Delivery(#[from] reqwest::Error),
}

/// Minimal ntfy publisher: one POST per report, fire-and-forget.
pub struct NtfyClient {
    client: reqwest::Client,
    url: String,
}

impl NtfyClient {
    pub fn new(endpoint: &str, topic: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{endpoint}/{topic}"),
        }
    }

    /// Client for the public ntfy endpoint, topic taken from [`TOPIC_ENV`].
    pub fn from_env() -> Result<Self, NotifyError> {
        let topic = env::var(TOPIC_ENV).map_err(|_| NotifyError::MissingTopic)?;
        Ok(Self::new(ENDPOINT, &topic))
    }

    /// Posts `message` under `title`. The response status is not inspected
    /// and nothing is retried; one attempt per run.
    pub async fn send(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        debug!("posting {} bytes to {}", message.len(), self.url);

        self.client
            .post(&self.url)
            .header("Title", title)
            .body(message.to_string())
            .send()
            .await?;

        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
