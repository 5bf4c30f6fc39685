use super::{DisplayNotification, INotifier};
use tracing::info;

/// Used when no display surface is configured
pub struct LogNotifier;

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn show(&self, notification: &DisplayNotification) -> anyhow::Result<()> {
        info!(
            notification_id = notification.notification_id,
            bill_id = %notification.bill_id,
            "{}: {}",
            notification.title,
            notification.body
        );
        Ok(())
    }
}
