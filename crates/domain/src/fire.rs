use crate::{
    delivery::{may_reschedule, should_display},
    history::HistoryEntry,
    reminder::{PendingOccurrence, ReminderPayload},
};

/// What should happen for one accepted fire event
#[derive(Debug, Clone, PartialEq)]
pub struct FireDecision {
    /// Show the notification on screen
    pub display: bool,
    /// Entry to append to the notification history
    pub history_entry: Option<HistoryEntry>,
    /// Occurrence to persist and arm next
    pub next_occurrence: Option<PendingOccurrence>,
}

/// Decides the effects of a fire event that already passed deduplication.
///
/// History is written for every owned reminder, even when the signed in
/// owner differs and the notification is not displayed. That keeps
/// reminders of a previously signed in user in the history; it is the
/// current product behavior and has not been reviewed yet.
pub fn decide_fire(payload: &ReminderPayload, now: i64, current_owner_id: &str) -> FireDecision {
    let series = &payload.series;

    let history_entry = if series.is_owned() {
        Some(HistoryEntry {
            title: payload.title.clone(),
            body: payload.display_body(),
            series_id: series.occurrence_id(),
            owner_user_id: series.owner_user_id.clone(),
            delivered_at_epoch_ms: now,
        })
    } else {
        None
    };

    let next_occurrence = if may_reschedule(&series.owner_user_id, current_owner_id) {
        series.next_occurrence(now)
    } else {
        None
    };

    FireDecision {
        display: should_display(&series.owner_user_id, current_owner_id),
        history_entry,
        next_occurrence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecurrenceRule, ReminderSeries};

    const NOW: i64 = 1_613_862_000_000;
    const WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

    fn payload_factory(
        owner: &str,
        rule: RecurrenceRule,
        sequence: u32,
        cap: Option<u32>,
    ) -> ReminderPayload {
        ReminderPayload {
            notification_id: 7,
            title: "Internet".into(),
            body: "Internet bill due".into(),
            series: ReminderSeries {
                series_id: "net".into(),
                owner_user_id: owner.into(),
                title: "Internet".into(),
                vendor: "FiberNet".into(),
                amount_minor: 4999,
                recurring: rule.is_recurring(),
                rule_name: rule.as_str().into(),
                rule,
                max_occurrences: cap,
                sequence,
            },
        }
    }

    #[test]
    fn weekly_series_regenerates_until_cap() {
        let first = payload_factory("alice", RecurrenceRule::Weekly, 1, Some(4));
        let decision = decide_fire(&first, NOW, "alice");
        assert!(decision.display);
        let next = decision.next_occurrence.expect("Second occurrence");
        assert_eq!(next.sequence, 2);
        assert_eq!(next.fire_time_epoch_ms, NOW + WEEK);

        let last = payload_factory("alice", RecurrenceRule::Weekly, 4, Some(4));
        let decision = decide_fire(&last, NOW, "alice");
        assert!(decision.display);
        assert!(decision.history_entry.is_some());
        assert!(decision.next_occurrence.is_none());
    }

    #[test]
    fn history_is_written_for_owned_reminders_regardless_of_display() {
        let payload = payload_factory("alice", RecurrenceRule::Monthly, 2, None);
        let decision = decide_fire(&payload, NOW, "bob");
        assert!(!decision.display);
        assert!(decision.next_occurrence.is_none());
        let entry = decision.history_entry.expect("History entry for owned reminder");
        assert_eq!(entry.series_id, "net_seq_2");
        assert_eq!(entry.body, "Internet bill due (#2)");
        assert_eq!(entry.owner_user_id, "alice");
        assert_eq!(entry.delivered_at_epoch_ms, NOW);
    }

    #[test]
    fn nobody_signed_in_blocks_display_and_reschedule() {
        let payload = payload_factory("alice", RecurrenceRule::Monthly, 2, None);
        let decision = decide_fire(&payload, NOW, "");
        assert!(!decision.display);
        assert!(decision.history_entry.is_some());
        assert!(decision.next_occurrence.is_none());
    }

    #[test]
    fn legacy_reminder_is_displayed_but_not_logged() {
        let payload = payload_factory("", RecurrenceRule::Weekly, 1, None);
        let decision = decide_fire(&payload, NOW, "");
        assert!(decision.display);
        assert!(decision.history_entry.is_none());
        assert!(decision.next_occurrence.is_none());

        let decision = decide_fire(&payload, NOW, "bob");
        assert!(decision.display);
        assert_eq!(decision.next_occurrence.map(|o| o.sequence), Some(2));
    }

    #[test]
    fn one_shot_reminder_never_regenerates() {
        let payload = payload_factory("alice", RecurrenceRule::None, 1, None);
        let decision = decide_fire(&payload, NOW, "alice");
        assert!(decision.display);
        assert!(decision.next_occurrence.is_none());
        assert_eq!(decision.history_entry.unwrap().series_id, "net");
    }
}
