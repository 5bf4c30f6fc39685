/// Whether a reminder owned by `notification_owner_id` may be shown while
/// `current_owner_id` is signed in. Empty ids mean legacy/unowned and
/// nobody signed in respectively.
pub fn should_display(notification_owner_id: &str, current_owner_id: &str) -> bool {
    if notification_owner_id.is_empty() {
        return true;
    }
    !current_owner_id.is_empty() && notification_owner_id == current_owner_id
}

/// Whether the next occurrence of a series may be armed. Unlike
/// `should_display`, nobody being signed in blocks even legacy reminders so
/// that timers do not pile up after a sign out.
pub fn may_reschedule(notification_owner_id: &str, current_owner_id: &str) -> bool {
    if current_owner_id.is_empty() {
        return false;
    }
    notification_owner_id.is_empty() || notification_owner_id == current_owner_id
}
