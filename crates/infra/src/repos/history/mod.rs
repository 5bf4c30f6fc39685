use super::{kv::IKeyValueStore, shared::json_collection::JsonCollection};
use bill_reminder_domain::{append_deduplicated, HistoryEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const NAMESPACE: &str = "notification_history";
const KEY: &str = "pending_notifications";

/// Persisted layout of a `HistoryEntry`, field names are read by the host app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEntryRaw {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    bill_id: String,
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    timestamp: i64,
}

impl From<HistoryEntryRaw> for HistoryEntry {
    fn from(raw: HistoryEntryRaw) -> Self {
        Self {
            title: raw.title,
            body: raw.body,
            series_id: raw.bill_id,
            owner_user_id: raw.user_id,
            delivered_at_epoch_ms: raw.timestamp,
        }
    }
}

impl From<HistoryEntry> for HistoryEntryRaw {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            title: entry.title,
            body: entry.body,
            bill_id: entry.series_id,
            user_id: entry.owner_user_id,
            timestamp: entry.delivered_at_epoch_ms,
        }
    }
}

/// Append-only log of delivered reminders, consumed and reset by the host app
pub struct HistoryRepo {
    entries: JsonCollection<Vec<HistoryEntryRaw>>,
}

impl HistoryRepo {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self {
            entries: JsonCollection::new(store, NAMESPACE, KEY),
        }
    }

    /// Appends `entry` unless a content-identical entry was logged within
    /// the history dedup window. Returns whether it was appended.
    pub async fn append(&self, entry: HistoryEntry) -> anyhow::Result<bool> {
        self.entries
            .update(|raw_entries| {
                let mut entries = raw_entries
                    .drain(..)
                    .map(HistoryEntry::from)
                    .collect::<Vec<_>>();
                let appended = append_deduplicated(&mut entries, entry);
                *raw_entries = entries.into_iter().map(HistoryEntryRaw::from).collect();
                appended
            })
            .await
    }

    pub async fn list_all(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        let entries = self.entries.read().await?;
        Ok(entries.into_iter().map(HistoryEntry::from).collect())
    }

    /// Lists and clears in one step
    pub async fn drain(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        let entries = self.entries.take().await?;
        Ok(entries.into_iter().map(HistoryEntry::from).collect())
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        self.entries.replace(&Vec::new()).await
    }
}
