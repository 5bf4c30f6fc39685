mod file;
mod inmemory;

pub use file::FileKeyValueStore;
pub use inmemory::InMemoryKeyValueStore;

/// Flat string storage split into namespaces, the shape of the platform
/// preference files the host app shares with the scheduler.
///
/// There are no transactions: callers that read-modify-write a value must
/// serialize themselves, see `JsonCollection`.
#[async_trait::async_trait]
pub trait IKeyValueStore: Send + Sync {
    async fn get(&self, namespace: &str, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, namespace: &str, key: &str, value: &str) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// One inmemory store and one file store in a fresh temp dir
    fn create_stores(dir: &tempfile::TempDir) -> Vec<Arc<dyn IKeyValueStore>> {
        vec![
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(FileKeyValueStore::new(dir.path().to_path_buf())),
        ]
    }

    #[tokio::test]
    async fn test_kv_queries() {
        let dir = tempfile::tempdir().expect("To create temp dir");

        for store in create_stores(&dir) {
            assert!(store.get("prefs", "missing").await.unwrap().is_none());

            store.set("prefs", "key", "[1,2]").await.unwrap();
            assert_eq!(
                store.get("prefs", "key").await.unwrap(),
                Some("[1,2]".to_string())
            );

            // Same key in another namespace is independent
            assert!(store.get("other", "key").await.unwrap().is_none());
            store.set("other", "key", "x").await.unwrap();
            assert_eq!(
                store.get("prefs", "key").await.unwrap(),
                Some("[1,2]".to_string())
            );

            // Overwrite
            store.set("prefs", "key", "[]").await.unwrap();
            assert_eq!(
                store.get("prefs", "key").await.unwrap(),
                Some("[]".to_string())
            );
        }
    }

    #[tokio::test]
    async fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("To create temp dir");
        let store = FileKeyValueStore::new(dir.path().to_path_buf());
        store.set("pending_recurring_bills", "bills", "[]").await.unwrap();

        let reopened = FileKeyValueStore::new(dir.path().to_path_buf());
        assert_eq!(
            reopened.get("pending_recurring_bills", "bills").await.unwrap(),
            Some("[]".to_string())
        );
    }
}
