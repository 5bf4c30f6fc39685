mod delivery;
mod dedup;
mod fire;
mod history;
mod reminder;
mod shared;

pub use dedup::{
    accept_notification, DedupTicket, DEDUP_TICKET_RETENTION_MILLIS, DEDUP_WINDOW_MILLIS,
};
pub use delivery::{may_reschedule, should_display};
pub use fire::{decide_fire, FireDecision};
pub use history::{append_deduplicated, HistoryEntry, HISTORY_DEDUP_WINDOW_MILLIS};
pub use reminder::{AlarmKey, PendingOccurrence, ReminderPayload, ReminderSeries, ScheduledAlarm};
pub use shared::amount::{format_whole_units, format_with_cents, major_to_minor, minor_to_major};
pub use shared::recurrence::{next_fire_time, next_sequence, RecurrenceRule};
