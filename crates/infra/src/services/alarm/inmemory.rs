use super::{AlarmHandle, AlarmPrecision, AlarmServiceError, IAlarmService};
use bill_reminder_domain::ReminderPayload;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredAlarm {
    pub handle: AlarmHandle,
    pub fire_time_epoch_ms: i64,
    pub payload: ReminderPayload,
    pub precision: AlarmPrecision,
}

/// Records registrations instead of arming real timers. Tests fire alarms
/// by taking the due ones out with `take_due`.
pub struct InMemoryAlarmService {
    alarms: Mutex<Vec<RegisteredAlarm>>,
    next_handle: AtomicU64,
    wake_permission_granted: AtomicBool,
    capabilities: Vec<AlarmPrecision>,
}

impl InMemoryAlarmService {
    pub fn new() -> Self {
        Self::with_capabilities(vec![
            AlarmPrecision::Exact,
            AlarmPrecision::ExactAllowWhileIdle,
            AlarmPrecision::AlarmClock,
        ])
    }

    pub fn with_capabilities(capabilities: Vec<AlarmPrecision>) -> Self {
        Self {
            alarms: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
            wake_permission_granted: AtomicBool::new(true),
            capabilities,
        }
    }

    pub fn set_wake_permission(&self, granted: bool) {
        self.wake_permission_granted.store(granted, Ordering::SeqCst);
    }

    pub fn registered(&self) -> Vec<RegisteredAlarm> {
        match self.alarms.lock() {
            Ok(alarms) => alarms.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Removes and returns every alarm whose fire time has been reached,
    /// earliest first
    pub fn take_due(&self, now: i64) -> Vec<RegisteredAlarm> {
        let mut alarms = match self.alarms.lock() {
            Ok(alarms) => alarms,
            Err(_) => return Vec::new(),
        };
        let (mut due, pending): (Vec<_>, Vec<_>) = alarms
            .drain(..)
            .partition(|alarm| alarm.fire_time_epoch_ms <= now);
        *alarms = pending;
        due.sort_by_key(|alarm| alarm.fire_time_epoch_ms);
        due
    }
}

impl Default for InMemoryAlarmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAlarmService for InMemoryAlarmService {
    fn capabilities(&self) -> Vec<AlarmPrecision> {
        self.capabilities.clone()
    }

    async fn register(
        &self,
        fire_time_epoch_ms: i64,
        payload: ReminderPayload,
        precision: AlarmPrecision,
    ) -> Result<AlarmHandle, AlarmServiceError> {
        if !self.wake_permission_granted.load(Ordering::SeqCst) {
            return Err(AlarmServiceError::PermissionDenied);
        }
        let handle = AlarmHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        let mut alarms = self
            .alarms
            .lock()
            .map_err(|_| AlarmServiceError::Unavailable("Alarm list is poisoned".into()))?;
        alarms.push(RegisteredAlarm {
            handle,
            fire_time_epoch_ms,
            payload,
            precision,
        });
        Ok(handle)
    }

    async fn cancel(&self, handle: AlarmHandle) {
        if let Ok(mut alarms) = self.alarms.lock() {
            alarms.retain(|alarm| alarm.handle != handle);
        }
    }
}
