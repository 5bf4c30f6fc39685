use std::{path::PathBuf, time::Duration};
use tracing::{info, warn};

const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Directory the persisted stores are written to. When absent the
    /// stores only live in memory and are lost with the process.
    pub store_dir: Option<PathBuf>,
    /// Endpoint that displayed notifications are posted to
    pub notification_webhook_url: Option<String>,
    /// Upper bound for one webhook request, connecting included
    pub notification_timeout: Duration,
    /// Whether the platform lets the scheduler arm wake alarms at all
    pub wake_permission_granted: bool,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                5000
            }
        };

        let store_dir = match std::env::var("REMINDER_STORE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            _ => {
                info!("Did not find REMINDER_STORE_DIR environment variable. Reminder state will only be kept in memory.");
                None
            }
        };

        let notification_webhook_url = std::env::var("NOTIFICATION_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let notification_timeout = match std::env::var("NOTIFICATION_WEBHOOK_TIMEOUT_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "The given NOTIFICATION_WEBHOOK_TIMEOUT_SECS: {} is not valid, falling back to {} seconds.",
                        secs, DEFAULT_NOTIFICATION_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS)
                }
            },
            Err(_) => Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS),
        };

        let wake_permission_granted = match std::env::var("ALARM_WAKE_PERMISSION") {
            Ok(permission) if permission.eq_ignore_ascii_case("denied") => {
                warn!("Wake alarm permission is denied, armed reminders will never fire.");
                false
            }
            _ => true,
        };

        Self {
            port,
            store_dir,
            notification_webhook_url,
            notification_timeout,
            wake_permission_granted,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
