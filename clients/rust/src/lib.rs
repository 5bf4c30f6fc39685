mod base;
mod history;
mod owner;
mod recovery_queue;
mod reminder;
mod status;
mod system;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use history::HistoryClient;
use owner::OwnerClient;
use recovery_queue::RecoveryQueueClient;
use reminder::ReminderClient;
pub use reminder::ScheduleReminderInput;
use status::StatusClient;
use std::sync::Arc;
use system::SystemClient;

pub use bill_reminder_api_structs::dtos::HistoryEntryDTO as HistoryEntry;
pub use bill_reminder_api_structs::dtos::PendingOccurrenceDTO as PendingOccurrence;
pub use bill_reminder_api_structs::{
    boot_completed::APIResponse as RecoveryReport, OwnerResponse,
};

/// Bill Reminder SDK
///
/// The SDK contains methods for interacting with the bill reminder
/// scheduler API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub history: HistoryClient,
    pub owner: OwnerClient,
    pub recovery_queue: RecoveryQueueClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub system: SystemClient,
}

impl ReminderSDK {
    /// `address` is the API root, e.g. `http://localhost:5000/api/v1`
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));

        Self {
            history: HistoryClient::new(base.clone()),
            owner: OwnerClient::new(base.clone()),
            recovery_queue: RecoveryQueueClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            system: SystemClient::new(base),
        }
    }
}
