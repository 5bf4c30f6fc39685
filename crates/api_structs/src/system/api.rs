use serde::{Deserialize, Serialize};

pub mod boot_completed {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// Occurrences armed again
        pub rearmed: usize,
        /// Occurrences already due, left in the queue for the host app
        pub overdue: usize,
        pub skipped_malformed: usize,
    }
}
