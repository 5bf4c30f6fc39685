use crate::dtos::PendingOccurrenceDTO;
use serde::{Deserialize, Serialize};

pub mod get_pending_recovery_queue {
    use super::*;

    pub type APIResponse = Vec<PendingOccurrenceDTO>;
}

pub mod clear_pending_recovery_queue {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
    }
}
