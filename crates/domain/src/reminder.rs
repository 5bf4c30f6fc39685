use crate::shared::{
    amount::{format_whole_units, format_with_cents},
    recurrence::{next_fire_time, next_sequence, RecurrenceRule},
};
use std::fmt::Display;

/// Identifies one armed timer.
///
/// Derived from the series id and the occurrence sequence with the same
/// hash the host app uses (Java `String.hashCode`), so the host can compute
/// the key of a regenerated occurrence without asking for it and arming the
/// same occurrence twice replaces the earlier timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlarmKey(pub i32);

impl AlarmKey {
    pub fn for_occurrence(series_id: &str, sequence: u32) -> Self {
        Self(java_string_hash(&format!("{}{}", series_id, sequence)))
    }

    pub fn inner(&self) -> i32 {
        self.0
    }
}

impl Display for AlarmKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn java_string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// A recurring reminder definition for one bill.
///
/// Authored by the host app; the scheduler only reads it and advances
/// `sequence` when an occurrence fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSeries {
    /// Stable per bill
    pub series_id: String,
    /// Empty for legacy reminders created before accounts existed
    pub owner_user_id: String,
    pub title: String,
    pub vendor: String,
    pub amount_minor: i64,
    /// The host's `isRecurring` flag. Drives the per-occurrence ids and the
    /// body annotation even when `rule` could not be recognised.
    pub recurring: bool,
    /// Rule name exactly as the host sent it
    pub rule_name: String,
    pub rule: RecurrenceRule,
    /// `None` means the series repeats until the host cancels it
    pub max_occurrences: Option<u32>,
    /// 1-based number of the current occurrence
    pub sequence: u32,
}

impl ReminderSeries {
    /// The host app encodes "no cap" as any non-positive repeat count
    pub fn cap_from_repeat_count(repeat_count: i64) -> Option<u32> {
        if repeat_count > 0 {
            Some(repeat_count.min(u32::MAX as i64) as u32)
        } else {
            None
        }
    }

    pub fn repeat_count(&self) -> i64 {
        self.max_occurrences.map(|cap| cap as i64).unwrap_or(-1)
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring
    }

    pub fn is_owned(&self) -> bool {
        !self.owner_user_id.is_empty()
    }

    /// Key used to suppress duplicate deliveries. Every occurrence of a
    /// recurring series gets its own key.
    pub fn notification_key(&self) -> String {
        if self.is_recurring() {
            format!("{}:{}", self.series_id, self.sequence)
        } else {
            self.series_id.clone()
        }
    }

    /// Bill id reported to the host app in the notification history
    pub fn occurrence_id(&self) -> String {
        if self.is_recurring() {
            format!("{}_seq_{}", self.series_id, self.sequence)
        } else {
            self.series_id.clone()
        }
    }

    pub fn cap_reached(&self) -> bool {
        match self.max_occurrences {
            Some(cap) => next_sequence(self.sequence) > cap,
            None => false,
        }
    }

    /// The occurrence following the current one, `None` once the series
    /// has terminated or its rule is not one the scheduler knows.
    pub fn next_occurrence(&self, from_millis: i64) -> Option<PendingOccurrence> {
        if !self.recurring || self.cap_reached() {
            return None;
        }
        let fire_time_epoch_ms = next_fire_time(self.rule, from_millis)?;

        Some(PendingOccurrence {
            series_id: self.series_id.clone(),
            title: self.title.clone(),
            amount_minor: self.amount_minor,
            vendor: self.vendor.clone(),
            owner_user_id: self.owner_user_id.clone(),
            rule_name: self.rule_name.clone(),
            rule: self.rule,
            sequence: next_sequence(self.sequence),
            max_occurrences: self.max_occurrences,
            fire_time_epoch_ms,
        })
    }
}

/// Everything a fire event needs, handed to the deferred-execution service
/// at schedule time and given back untouched when the alarm fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderPayload {
    /// Id of the on-screen notification
    pub notification_id: i32,
    pub title: String,
    pub body: String,
    pub series: ReminderSeries,
}

impl ReminderPayload {
    pub fn alarm_key(&self) -> AlarmKey {
        AlarmKey::for_occurrence(&self.series.series_id, self.series.sequence)
    }

    pub fn notification_key(&self) -> String {
        self.series.notification_key()
    }

    /// Body shown to the user, annotated with the occurrence number for
    /// recurring series.
    pub fn display_body(&self) -> String {
        if !self.series.is_recurring() {
            return self.body.clone();
        }
        match self.series.max_occurrences {
            Some(cap) => format!("{} ({} of {})", self.body, self.series.sequence, cap),
            None => format!("{} (#{})", self.body, self.series.sequence),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAlarm {
    pub alarm_key: AlarmKey,
    pub fire_time_epoch_ms: i64,
    pub payload: ReminderPayload,
}

/// Snapshot of a computed next occurrence, self-contained enough to re-arm
/// its timer without the host app running.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOccurrence {
    pub series_id: String,
    pub title: String,
    pub amount_minor: i64,
    pub vendor: String,
    pub owner_user_id: String,
    pub rule_name: String,
    pub rule: RecurrenceRule,
    pub sequence: u32,
    pub max_occurrences: Option<u32>,
    pub fire_time_epoch_ms: i64,
}

impl PendingOccurrence {
    pub fn series(&self) -> ReminderSeries {
        ReminderSeries {
            series_id: self.series_id.clone(),
            owner_user_id: self.owner_user_id.clone(),
            title: self.title.clone(),
            vendor: self.vendor.clone(),
            amount_minor: self.amount_minor,
            recurring: true,
            rule_name: self.rule_name.clone(),
            rule: self.rule,
            max_occurrences: self.max_occurrences,
            sequence: self.sequence,
        }
    }

    pub fn alarm_key(&self) -> AlarmKey {
        AlarmKey::for_occurrence(&self.series_id, self.sequence)
    }

    pub fn is_future(&self, now: i64) -> bool {
        self.fire_time_epoch_ms > now
    }

    /// Payload armed right after the previous occurrence fired
    pub fn overdue_payload(&self) -> ReminderPayload {
        ReminderPayload {
            notification_id: self.alarm_key().inner(),
            title: format!("{} Overdue", self.title),
            body: format!(
                "{} of ${} is overdue",
                self.title,
                format_whole_units(self.amount_minor)
            ),
            series: self.series(),
        }
    }

    /// Payload armed when the occurrence is restored after a reboot
    pub fn due_today_payload(&self) -> ReminderPayload {
        ReminderPayload {
            notification_id: self.alarm_key().inner(),
            title: "Bill Due Today".into(),
            body: format!(
                "{} - ${} due to {}",
                self.title,
                format_with_cents(self.amount_minor),
                self.vendor
            ),
            series: self.series(),
        }
    }
}
