use crate::dtos::HistoryEntryDTO;
use serde::{Deserialize, Serialize};

pub mod get_pending_history {
    use super::*;

    pub type APIResponse = Vec<HistoryEntryDTO>;
}

pub mod drain_pending_history {
    use super::*;

    pub type APIResponse = Vec<HistoryEntryDTO>;
}

pub mod clear_pending_history {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
    }
}
