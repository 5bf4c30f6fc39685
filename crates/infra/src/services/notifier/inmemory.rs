use super::{DisplayNotification, INotifier};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    shown: Mutex<Vec<DisplayNotification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn shown(&self) -> Vec<DisplayNotification> {
        match self.shown.lock() {
            Ok(shown) => shown.clone(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn show(&self, notification: &DisplayNotification) -> anyhow::Result<()> {
        self.shown
            .lock()
            .map_err(|_| anyhow::anyhow!("Notification list is poisoned"))?
            .push(notification.clone());
        Ok(())
    }
}
