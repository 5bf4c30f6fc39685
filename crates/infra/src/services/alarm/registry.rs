use super::{AlarmHandle, AlarmPrecision, IAlarmService};
use bill_reminder_domain::{AlarmKey, ReminderPayload, ScheduledAlarm};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

struct ArmedAlarm {
    handle: AlarmHandle,
    alarm: ScheduledAlarm,
}

/// Keeps track of the armed alarms by `AlarmKey` so that arming the same
/// occurrence again replaces the earlier registration.
pub struct AlarmRegistry {
    service: Arc<dyn IAlarmService>,
    armed: Mutex<HashMap<AlarmKey, ArmedAlarm>>,
}

fn format_epoch_millis(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(date) => date.to_rfc3339(),
        None => millis.to_string(),
    }
}

impl AlarmRegistry {
    pub fn new(service: Arc<dyn IAlarmService>) -> Self {
        Self {
            service,
            armed: Mutex::new(HashMap::new()),
        }
    }

    /// Most reliable tier the platform offers
    pub fn precision(&self) -> AlarmPrecision {
        self.service
            .capabilities()
            .into_iter()
            .max()
            .unwrap_or(AlarmPrecision::Exact)
    }

    /// Arms an alarm for `payload`. If the platform refuses, the failure is
    /// logged and the reminder simply never fires; the key is returned
    /// either way.
    pub async fn schedule(&self, fire_time_epoch_ms: i64, payload: ReminderPayload) -> AlarmKey {
        let alarm_key = payload.alarm_key();
        let precision = self.precision();

        let mut armed = self.armed.lock().await;
        if let Some(previous) = armed.remove(&alarm_key) {
            self.service.cancel(previous.handle).await;
        }

        match self
            .service
            .register(fire_time_epoch_ms, payload.clone(), precision)
            .await
        {
            Ok(handle) => {
                info!(
                    "Armed {:?} alarm {} for {} ({})",
                    precision,
                    alarm_key,
                    payload.series.series_id,
                    format_epoch_millis(fire_time_epoch_ms)
                );
                armed.insert(
                    alarm_key,
                    ArmedAlarm {
                        handle,
                        alarm: ScheduledAlarm {
                            alarm_key,
                            fire_time_epoch_ms,
                            payload,
                        },
                    },
                );
            }
            Err(e) => warn!(
                "Unable to arm alarm {} for {} at {}: {}. The reminder will not fire.",
                alarm_key,
                payload.series.series_id,
                format_epoch_millis(fire_time_epoch_ms),
                e
            ),
        }

        alarm_key
    }

    /// Disarms every alarm registered under `id`, which the host app may
    /// pass either as the alarm key or as the notification id. Returns
    /// whether anything was armed.
    pub async fn cancel(&self, id: i32) -> bool {
        let mut armed = self.armed.lock().await;
        let keys = armed
            .iter()
            .filter(|(key, entry)| key.inner() == id || entry.alarm.payload.notification_id == id)
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();

        for key in &keys {
            if let Some(entry) = armed.remove(key) {
                self.service.cancel(entry.handle).await;
                info!("Cancelled alarm {}", key);
            }
        }

        !keys.is_empty()
    }

    /// Forgets an alarm that went off. A registration that replaced it in the
    /// meantime is kept.
    pub async fn mark_fired(&self, payload: &ReminderPayload) {
        let alarm_key = payload.alarm_key();
        let mut armed = self.armed.lock().await;
        let fired = armed
            .get(&alarm_key)
            .map(|entry| entry.alarm.payload == *payload)
            .unwrap_or(false);
        if fired {
            armed.remove(&alarm_key);
        }
    }

    /// Currently armed alarms, earliest first
    pub async fn armed(&self) -> Vec<ScheduledAlarm> {
        let armed = self.armed.lock().await;
        let mut alarms = armed
            .values()
            .map(|entry| entry.alarm.clone())
            .collect::<Vec<_>>();
        alarms.sort_by_key(|alarm| alarm.fire_time_epoch_ms);
        alarms
    }
}
