use serde::{Deserialize, Serialize};

pub mod schedule_reminder {
    use super::*;

    fn default_sequence() -> u32 {
        1
    }

    fn default_repeat_count() -> i64 {
        -1
    }

    /// Fields after `notification_id` describe the series and may be left
    /// out for a plain one-shot reminder
    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Fire time in epoch millis
        pub time: i64,
        pub title: String,
        pub body: String,
        pub notification_id: i32,
        #[serde(default)]
        pub user_id: String,
        #[serde(default)]
        pub bill_id: String,
        #[serde(default)]
        pub is_recurring: bool,
        #[serde(default)]
        pub recurring_type: Option<String>,
        #[serde(default)]
        pub bill_title: Option<String>,
        /// Major currency units
        #[serde(default)]
        pub bill_amount: Option<f64>,
        #[serde(default)]
        pub bill_vendor: Option<String>,
        #[serde(default = "default_sequence")]
        pub current_sequence: u32,
        /// Non-positive means the series repeats until cancelled
        #[serde(default = "default_repeat_count")]
        pub repeat_count: i64,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub alarm_key: i32,
    }

    impl APIResponse {
        pub fn new(alarm_key: i32) -> Self {
            Self {
                success: true,
                alarm_key,
            }
        }
    }
}

pub mod cancel_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub notification_id: i32,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
    }
}
