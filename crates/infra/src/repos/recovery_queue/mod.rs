use super::{kv::IKeyValueStore, shared::json_collection::JsonCollection};
use bill_reminder_domain::{
    major_to_minor, minor_to_major, PendingOccurrence, RecurrenceRule, ReminderSeries,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const NAMESPACE: &str = "pending_recurring_bills";
const KEY: &str = "bills";

/// Persisted layout of a `PendingOccurrence`, field names are read by the
/// host app
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PendingOccurrenceRaw {
    bill_id: String,
    title: String,
    amount: f64,
    vendor: String,
    #[serde(default)]
    user_id: String,
    /// Kept verbatim, the host app matches on its own spelling
    recurring_type: String,
    sequence: u32,
    repeat_count: i64,
    due_time: i64,
}

impl From<PendingOccurrenceRaw> for PendingOccurrence {
    fn from(raw: PendingOccurrenceRaw) -> Self {
        Self {
            series_id: raw.bill_id,
            title: raw.title,
            amount_minor: major_to_minor(raw.amount),
            vendor: raw.vendor,
            owner_user_id: raw.user_id,
            rule: raw
                .recurring_type
                .parse::<RecurrenceRule>()
                .unwrap_or_default(),
            rule_name: raw.recurring_type,
            sequence: raw.sequence,
            max_occurrences: ReminderSeries::cap_from_repeat_count(raw.repeat_count),
            fire_time_epoch_ms: raw.due_time,
        }
    }
}

impl From<&PendingOccurrence> for PendingOccurrenceRaw {
    fn from(occurrence: &PendingOccurrence) -> Self {
        Self {
            bill_id: occurrence.series_id.clone(),
            title: occurrence.title.clone(),
            amount: minor_to_major(occurrence.amount_minor),
            vendor: occurrence.vendor.clone(),
            user_id: occurrence.owner_user_id.clone(),
            recurring_type: occurrence.rule_name.clone(),
            sequence: occurrence.sequence,
            repeat_count: occurrence.series().repeat_count(),
            due_time: occurrence.fire_time_epoch_ms,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecoveryQueueListing {
    /// Parsed rows in the order they were pushed
    pub occurrences: Vec<PendingOccurrence>,
    /// Rows that could not be parsed and were skipped
    pub malformed: usize,
}

/// Durable handoff buffer of computed next occurrences.
///
/// Rows are kept as raw JSON values so a row the scheduler cannot parse is
/// still carried through later pushes untouched; the host app owns the
/// decision of what to do with it.
pub struct RecoveryQueueRepo {
    rows: JsonCollection<Vec<serde_json::Value>>,
}

impl RecoveryQueueRepo {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self {
            rows: JsonCollection::new(store, NAMESPACE, KEY),
        }
    }

    pub async fn push(&self, occurrence: &PendingOccurrence) -> anyhow::Result<()> {
        let row = serde_json::to_value(PendingOccurrenceRaw::from(occurrence))?;
        self.rows.update(|rows| rows.push(row)).await
    }

    pub async fn list_all(&self) -> anyhow::Result<RecoveryQueueListing> {
        let rows = self.rows.read().await?;
        let mut listing = RecoveryQueueListing::default();
        for row in rows {
            match serde_json::from_value::<PendingOccurrenceRaw>(row) {
                Ok(raw) => listing.occurrences.push(raw.into()),
                Err(e) => {
                    warn!("Skipping malformed pending recurring bill: {}", e);
                    listing.malformed += 1;
                }
            }
        }
        Ok(listing)
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        self.rows.replace(&Vec::new()).await
    }
}
