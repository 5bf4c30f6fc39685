use crate::repos::kv::IKeyValueStore;
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A whole collection serialized as one JSON value under a single key.
///
/// Every access goes through a lock owned by this collection alone, so
/// read-modify-write cycles on the same collection never interleave while
/// unrelated collections stay independent. The lock is never held while
/// another collection is accessed.
pub struct JsonCollection<T> {
    store: Arc<dyn IKeyValueStore>,
    namespace: &'static str,
    key: &'static str,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Default + Send,
{
    pub fn new(store: Arc<dyn IKeyValueStore>, namespace: &'static str, key: &'static str) -> Self {
        Self {
            store,
            namespace,
            key,
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    async fn load(&self) -> anyhow::Result<T> {
        let raw = self.store.get(self.namespace, self.key).await?;
        match raw {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .with_context(|| format!("Malformed collection {}/{}", self.namespace, self.key)),
            _ => Ok(T::default()),
        }
    }

    async fn store(&self, value: &T) -> anyhow::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(self.namespace, self.key, &raw).await
    }

    pub async fn read(&self) -> anyhow::Result<T> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    pub async fn replace(&self, value: &T) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        self.store(value).await
    }

    /// Loads the collection, applies `modify` and writes the result back,
    /// all while holding the lock.
    pub async fn update<R, F>(&self, modify: F) -> anyhow::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut value = self.load().await?;
        let res = modify(&mut value);
        self.store(&value).await?;
        Ok(res)
    }

    /// Returns the current collection and resets it to empty in one step
    pub async fn take(&self) -> anyhow::Result<T> {
        let _guard = self.lock.lock().await;
        let value = self.load().await?;
        self.store(&T::default()).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::kv::InMemoryKeyValueStore;

    #[tokio::test]
    async fn missing_collection_reads_as_default() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let collection: JsonCollection<Vec<i64>> = JsonCollection::new(store, "ns", "key");
        assert!(collection.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_collection_is_an_error() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("ns", "key", "{not json").await.unwrap();
        let collection: JsonCollection<Vec<i64>> = JsonCollection::new(store, "ns", "key");
        assert!(collection.read().await.is_err());
        assert!(collection.update(|values| values.push(1)).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_are_not_lost() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let collection: Arc<JsonCollection<Vec<i64>>> =
            Arc::new(JsonCollection::new(store, "ns", "key"));

        let mut handles = Vec::new();
        for i in 0..50 {
            let collection = collection.clone();
            handles.push(tokio::spawn(async move {
                collection.update(|values| values.push(i)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut values = collection.read().await.unwrap();
        values.sort_unstable();
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn take_empties_the_collection() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let collection: JsonCollection<Vec<i64>> = JsonCollection::new(store, "ns", "key");
        collection.replace(&vec![1, 2]).await.unwrap();
        assert_eq!(collection.take().await.unwrap(), vec![1, 2]);
        assert!(collection.read().await.unwrap().is_empty());
    }
}
