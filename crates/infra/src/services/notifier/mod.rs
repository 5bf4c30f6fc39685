mod inmemory;
mod log;
mod webhook;

pub use self::log::LogNotifier;
pub use inmemory::InMemoryNotifier;
pub use webhook::WebhookNotifier;

use serde::Serialize;

/// A notification as it is put on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNotification {
    pub notification_id: i32,
    pub title: String,
    pub body: String,
    pub bill_id: String,
}

/// Puts notifications in front of the user
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn show(&self, notification: &DisplayNotification) -> anyhow::Result<()>;
}
