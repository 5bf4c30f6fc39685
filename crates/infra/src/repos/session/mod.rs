use super::kv::IKeyValueStore;
use std::sync::Arc;

const NAMESPACE: &str = "session";
const KEY: &str = "currentUserId";

/// The owner currently signed in to the host app.
///
/// Written by the host app, only read at fire time. Stored as a plain
/// string, an empty value meaning nobody is signed in.
pub struct SessionRepo {
    store: Arc<dyn IKeyValueStore>,
}

impl SessionRepo {
    pub fn new(store: Arc<dyn IKeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn current_owner_id(&self) -> anyhow::Result<String> {
        Ok(self.store.get(NAMESPACE, KEY).await?.unwrap_or_default())
    }

    pub async fn set_current_owner_id(&self, owner_id: &str) -> anyhow::Result<()> {
        self.store.set(NAMESPACE, KEY, owner_id).await
    }
}
