/// Content-identical entries closer together than this are collapsed.
/// Test series fire every minute, so this must stay well below that.
pub const HISTORY_DEDUP_WINDOW_MILLIS: i64 = 3 * 1000;

/// A reminder that was delivered, or at least logged, for the host app to
/// pick up.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub title: String,
    pub body: String,
    /// Occurrence id of the bill, see `ReminderSeries::occurrence_id`
    pub series_id: String,
    pub owner_user_id: String,
    pub delivered_at_epoch_ms: i64,
}

impl HistoryEntry {
    fn same_content(&self, other: &HistoryEntry) -> bool {
        self.title == other.title
            && self.body == other.body
            && self.series_id == other.series_id
            && self.owner_user_id == other.owner_user_id
    }

    /// Whether `self` repeats an `earlier` entry
    pub fn duplicates(&self, earlier: &HistoryEntry) -> bool {
        let elapsed = self.delivered_at_epoch_ms - earlier.delivered_at_epoch_ms;
        self.same_content(earlier) && (0..=HISTORY_DEDUP_WINDOW_MILLIS).contains(&elapsed)
    }
}

/// Appends `entry` unless it duplicates an existing one. Returns whether it
/// was appended.
pub fn append_deduplicated(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) -> bool {
    if entries.iter().any(|existing| entry.duplicates(existing)) {
        return false;
    }
    entries.push(entry);
    true
}
