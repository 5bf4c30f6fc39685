mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    FileKeyValueStore, IKeyValueStore, InMemoryKeyValueStore, RecoveryQueueListing, Repos,
};
pub use services::alarm::{
    AlarmHandle, AlarmPrecision, AlarmRegistry, AlarmServiceError, FiredAlarms, IAlarmService,
    InMemoryAlarmService, RegisteredAlarm, TokioAlarmService,
};
pub use services::notifier::{
    DisplayNotification, INotifier, InMemoryNotifier, LogNotifier, WebhookNotifier,
};
use std::sync::Arc;
use tracing::error;
pub use system::{ISys, MockSys, RealSys};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub alarms: Arc<AlarmRegistry>,
    pub notifier: Arc<dyn INotifier>,
}

impl ReminderContext {
    pub fn new(
        repos: Repos,
        config: Config,
        sys: Arc<dyn ISys>,
        alarm_service: Arc<dyn IAlarmService>,
        notifier: Arc<dyn INotifier>,
    ) -> Self {
        Self {
            repos,
            config,
            sys,
            alarms: Arc::new(AlarmRegistry::new(alarm_service)),
            notifier,
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// The returned `FiredAlarms` yields the payload of every alarm armed
/// through the context once it goes off.
pub fn setup_context() -> (ReminderContext, FiredAlarms) {
    let config = Config::new();
    let sys: Arc<dyn ISys> = Arc::new(RealSys {});

    let repos = match &config.store_dir {
        Some(dir) => Repos::create_file(dir.clone()),
        None => Repos::create_inmemory(),
    };

    let (alarm_service, fired_alarms) = TokioAlarmService::new(sys.clone());
    let alarm_service = alarm_service.with_wake_permission(config.wake_permission_granted);

    let notifier: Arc<dyn INotifier> = match &config.notification_webhook_url {
        Some(url) => match WebhookNotifier::new(url.clone(), config.notification_timeout) {
            Ok(notifier) => Arc::new(notifier),
            Err(e) => {
                error!("Falling back to logging notifications: {:?}", e);
                Arc::new(LogNotifier)
            }
        },
        None => Arc::new(LogNotifier),
    };

    let context = ReminderContext::new(repos, config, sys, Arc::new(alarm_service), notifier);
    (context, fired_alarms)
}
