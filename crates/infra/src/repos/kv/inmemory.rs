use super::IKeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<(String, String), String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IKeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, namespace: &str, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("In memory key value store is poisoned"))?;
        Ok(values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("In memory key value store is poisoned"))?;
        values.insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
