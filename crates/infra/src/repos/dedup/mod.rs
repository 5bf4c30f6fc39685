use super::{kv::IKeyValueStore, shared::json_collection::JsonCollection};
use bill_reminder_domain::accept_notification;
use std::collections::BTreeMap;
use std::sync::Arc;

const NAMESPACE: &str = "shown_notifications";
const KEY: &str = "tickets";

/// Persisted `DedupTicket`s, stored as a flat `{notificationKey: epochMs}` map
pub struct DedupRepo {
    tickets: JsonCollection<BTreeMap<String, i64>>,
}

impl DedupRepo {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self {
            tickets: JsonCollection::new(store, NAMESPACE, KEY),
        }
    }

    /// Accepts a fire event unless the same key was accepted within the
    /// dedup window. Expired tickets are purged as part of the write.
    pub async fn accept(&self, notification_key: &str, now: i64) -> anyhow::Result<bool> {
        self.tickets
            .update(|tickets| accept_notification(tickets, notification_key, now))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::kv::InMemoryKeyValueStore;

    #[tokio::test]
    async fn accepts_once_per_window() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = DedupRepo::new(store.clone());
        let now = 1_700_000_000_000;

        assert!(repo.accept("bill:1", now).await.unwrap());
        assert!(!repo.accept("bill:1", now + 10_000).await.unwrap());
        assert!(repo.accept("bill:2", now + 10_000).await.unwrap());
        assert!(repo.accept("bill:1", now + 31_000).await.unwrap());

        // Persisted as a flat map the host app can read
        let raw = store.get(NAMESPACE, KEY).await.unwrap().unwrap();
        let parsed: BTreeMap<String, i64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("bill:1"), Some(&(now + 31_000)));
        assert_eq!(parsed.get("bill:2"), Some(&(now + 10_000)));
    }

    #[tokio::test]
    async fn purges_old_tickets() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = DedupRepo::new(store.clone());
        let now = 1_700_000_000_000;

        repo.accept("old", now).await.unwrap();
        repo.accept("new", now + 6 * 60 * 1000).await.unwrap();

        let raw = store.get(NAMESPACE, KEY).await.unwrap().unwrap();
        let tickets: BTreeMap<String, i64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(tickets.keys().collect::<Vec<_>>(), vec!["new"]);
    }
}
