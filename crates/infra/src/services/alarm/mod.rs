mod inmemory;
mod registry;
mod tokio_timer;

pub use inmemory::{InMemoryAlarmService, RegisteredAlarm};
pub use registry::AlarmRegistry;
pub use tokio_timer::{FiredAlarms, TokioAlarmService};

use bill_reminder_domain::ReminderPayload;
use thiserror::Error;

/// Delivery guarantee tiers of a deferred-execution service, ordered from
/// least to most reliable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlarmPrecision {
    /// Fires at the requested time unless the device is idle
    Exact,
    /// Fires at the requested time even when the device is idle
    ExactAllowWhileIdle,
    /// User visible alarm clock, exempt from power restrictions
    AlarmClock,
}

/// Opaque id of one registration with the deferred-execution service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlarmHandle(pub u64);

#[derive(Error, Debug)]
pub enum AlarmServiceError {
    #[error("The platform denied permission to arm wake alarms")]
    PermissionDenied,
    #[error("The alarm service is unavailable: {0}")]
    Unavailable(String),
}

/// The platform service that puts the process to sleep and wakes it up.
///
/// A registered payload is delivered back at least once, never before
/// `fire_time_epoch_ms`, possibly late and possibly never if the platform
/// withdraws the wake permission.
#[async_trait::async_trait]
pub trait IAlarmService: Send + Sync {
    /// Precision tiers this platform supports
    fn capabilities(&self) -> Vec<AlarmPrecision>;
    async fn register(
        &self,
        fire_time_epoch_ms: i64,
        payload: ReminderPayload,
        precision: AlarmPrecision,
    ) -> Result<AlarmHandle, AlarmServiceError>;
    async fn cancel(&self, handle: AlarmHandle);
}
