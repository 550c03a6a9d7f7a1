// Notifier trait for forwarding leads to an external sink
use async_trait::async_trait;
use serde::Serialize;

/// What gets posted to the chat webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadNotification {
    pub content: String,
    pub thread_name: String,
}

#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Deliver one notification. Any transport error or non-success
    /// response is an error; there is no retry.
    async fn notify(&self, notification: &LeadNotification) -> anyhow::Result<()>;
}
