// Chat webhook notifier implementation
use crate::application::lead_notifier::{LeadNotification, LeadNotifier};
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl LeadNotifier for WebhookNotifier {
    async fn notify(&self, notification: &LeadNotification) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(notification)
            .send()
            .await
            .context("Failed to send request to lead webhook")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Lead webhook answered with status {}: {}", status, body);
        }

        Ok(())
    }
}
