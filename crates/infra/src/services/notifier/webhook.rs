use super::{DisplayNotification, INotifier};
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Posts every displayed notification as JSON to a configured endpoint
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    /// `timeout` bounds each post, so an endpoint that never answers cannot
    /// hold a fire event forever
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Unable to build the notification webhook client")?;
        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn show(&self, notification: &DisplayNotification) -> anyhow::Result<()> {
        info!(
            "Posting notification {} to {}",
            notification.notification_id, self.url
        );
        self.client
            .post(&self.url)
            .json(notification)
            .send()
            .await
            .with_context(|| format!("Unable to reach notification webhook {}", self.url))?
            .error_for_status()
            .with_context(|| format!("Notification webhook {} rejected the notification", self.url))?;
        Ok(())
    }
}
