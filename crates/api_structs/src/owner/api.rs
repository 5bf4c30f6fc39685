use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    /// Empty when nobody is signed in
    pub user_id: String,
}

impl OwnerResponse {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

pub mod get_current_owner {
    use super::*;

    pub type APIResponse = OwnerResponse;
}

pub mod set_current_owner {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub user_id: String,
    }

    pub type APIResponse = OwnerResponse;
}
