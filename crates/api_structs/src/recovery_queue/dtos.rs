use bill_reminder_domain::{minor_to_major, PendingOccurrence};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOccurrenceDTO {
    pub bill_id: String,
    pub title: String,
    pub amount: f64,
    pub vendor: String,
    pub user_id: String,
    pub recurring_type: String,
    pub sequence: u32,
    pub repeat_count: i64,
    pub due_time: i64,
}

impl PendingOccurrenceDTO {
    pub fn new(occurrence: PendingOccurrence) -> Self {
        let repeat_count = occurrence.series().repeat_count();
        Self {
            bill_id: occurrence.series_id,
            title: occurrence.title,
            amount: minor_to_major(occurrence.amount_minor),
            vendor: occurrence.vendor,
            user_id: occurrence.owner_user_id,
            recurring_type: occurrence.rule_name,
            sequence: occurrence.sequence,
            repeat_count,
            due_time: occurrence.fire_time_epoch_ms,
        }
    }
}
