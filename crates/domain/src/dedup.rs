use std::collections::BTreeMap;

/// A second fire event for the same key within this window is a duplicate
pub const DEDUP_WINDOW_MILLIS: i64 = 30 * 1000;
/// Tickets older than this are purged on every write
pub const DEDUP_TICKET_RETENTION_MILLIS: i64 = 5 * 60 * 1000;

/// Remembers when a notification key was last accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupTicket {
    pub notification_key: String,
    pub last_shown_at_epoch_ms: i64,
}

impl DedupTicket {
    pub fn suppresses(&self, now: i64) -> bool {
        self.last_shown_at_epoch_ms > 0 && now - self.last_shown_at_epoch_ms < DEDUP_WINDOW_MILLIS
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now - self.last_shown_at_epoch_ms > DEDUP_TICKET_RETENTION_MILLIS
    }
}

/// Decides whether a fire event for `notification_key` is accepted and, if
/// so, records it in `tickets` and purges expired tickets.
///
/// `tickets` maps notification keys to the epoch millis they were last
/// accepted at, which is also how the tickets are persisted.
pub fn accept_notification(
    tickets: &mut BTreeMap<String, i64>,
    notification_key: &str,
    now: i64,
) -> bool {
    if let Some(last_shown_at) = tickets.get(notification_key) {
        let ticket = DedupTicket {
            notification_key: notification_key.to_string(),
            last_shown_at_epoch_ms: *last_shown_at,
        };
        if ticket.suppresses(now) {
            return false;
        }
    }

    tickets.insert(notification_key.to_string(), now);
    tickets.retain(|key, last_shown_at| {
        !DedupTicket {
            notification_key: key.clone(),
            last_shown_at_epoch_ms: *last_shown_at,
        }
        .is_expired(now)
    });
    true
}
