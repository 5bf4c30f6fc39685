use bill_reminder_domain::HistoryEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDTO {
    pub title: String,
    pub body: String,
    pub bill_id: String,
    pub user_id: String,
    pub timestamp: i64,
}

impl HistoryEntryDTO {
    pub fn new(entry: HistoryEntry) -> Self {
        Self {
            title: entry.title,
            body: entry.body,
            bill_id: entry.series_id,
            user_id: entry.owner_user_id,
            timestamp: entry.delivered_at_epoch_ms,
        }
    }
}
