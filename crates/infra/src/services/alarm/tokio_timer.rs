use super::{AlarmHandle, AlarmPrecision, AlarmServiceError, IAlarmService};
use crate::system::ISys;
use bill_reminder_domain::ReminderPayload;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Payloads of alarms that went off, in firing order
pub struct FiredAlarms {
    receiver: UnboundedReceiver<ReminderPayload>,
}

impl FiredAlarms {
    pub async fn recv(&mut self) -> Option<ReminderPayload> {
        self.receiver.recv().await
    }
}

type Timers = Arc<Mutex<HashMap<u64, JoinHandle<()>>>>;

/// In-process deferred-execution service: one tokio task per armed alarm.
pub struct TokioAlarmService {
    sys: Arc<dyn ISys>,
    sender: UnboundedSender<ReminderPayload>,
    timers: Timers,
    next_handle: AtomicU64,
    wake_permission_granted: bool,
}

impl TokioAlarmService {
    pub fn new(sys: Arc<dyn ISys>) -> (Self, FiredAlarms) {
        let (sender, receiver) = unbounded_channel();
        let service = Self {
            sys,
            sender,
            timers: Arc::new(Mutex::new(HashMap::new())),
            next_handle: AtomicU64::new(1),
            wake_permission_granted: true,
        };
        (service, FiredAlarms { receiver })
    }

    pub fn with_wake_permission(mut self, granted: bool) -> Self {
        self.wake_permission_granted = granted;
        self
    }
}

async fn sleep_until_epoch_millis(sys: &dyn ISys, fire_time_epoch_ms: i64) {
    // Re-check the wall clock after every sleep so that a clock adjustment
    // never makes the alarm fire early
    loop {
        let now = sys.get_timestamp_millis();
        if now >= fire_time_epoch_ms {
            return;
        }
        tokio::time::sleep(Duration::from_millis((fire_time_epoch_ms - now) as u64)).await;
    }
}

#[async_trait::async_trait]
impl IAlarmService for TokioAlarmService {
    fn capabilities(&self) -> Vec<AlarmPrecision> {
        vec![
            AlarmPrecision::Exact,
            AlarmPrecision::ExactAllowWhileIdle,
            AlarmPrecision::AlarmClock,
        ]
    }

    async fn register(
        &self,
        fire_time_epoch_ms: i64,
        payload: ReminderPayload,
        precision: AlarmPrecision,
    ) -> Result<AlarmHandle, AlarmServiceError> {
        if !self.wake_permission_granted {
            return Err(AlarmServiceError::PermissionDenied);
        }

        let id = self.next_handle.fetch_add(1, Ordering::SeqCst);
        let sys = self.sys.clone();
        let sender = self.sender.clone();
        let timers = self.timers.clone();

        let mut armed_timers = self
            .timers
            .lock()
            .map_err(|_| AlarmServiceError::Unavailable("Timer registry is poisoned".into()))?;
        debug!(
            "Arming {:?} timer {} for {}",
            precision, id, fire_time_epoch_ms
        );
        let task = tokio::spawn(async move {
            sleep_until_epoch_millis(sys.as_ref(), fire_time_epoch_ms).await;
            if let Ok(mut timers) = timers.lock() {
                timers.remove(&id);
            }
            if sender.send(payload).is_err() {
                warn!("Alarm {} fired but nobody is listening for fired alarms", id);
            }
        });
        armed_timers.insert(id, task);

        Ok(AlarmHandle(id))
    }

    async fn cancel(&self, handle: AlarmHandle) {
        let task = match self.timers.lock() {
            Ok(mut timers) => timers.remove(&handle.0),
            Err(_) => None,
        };
        if let Some(task) = task {
            task.abort();
        }
    }
}
