use super::IKeyValueStore;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);

/// Stores every value in its own file, `<root>/<namespace>/<key>.json`.
///
/// Writes go to a temp file that is renamed over the old value, so a crash
/// mid-write leaves either the old or the new value behind. Every write has
/// its own temp file; concurrent writers of one key never share it and the
/// last rename wins.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn value_path(&self, namespace: &str, key: &str) -> PathBuf {
        self.root.join(namespace).join(format!("{}.json", key))
    }
}

fn read_value(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Unable to read {}", path.display())),
    }
}

fn write_value(path: &Path, value: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create {}", parent.display()))?;
    }

    let write_id = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    let tmp_path = path.with_extension(format!("{}.{}.tmp", std::process::id(), write_id));
    std::fs::write(&tmp_path, value)
        .with_context(|| format!("Unable to write {}", tmp_path.display()))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Unable to replace {}", path.display()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl IKeyValueStore for FileKeyValueStore {
    async fn get(&self, namespace: &str, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.value_path(namespace, key);
        tokio::task::spawn_blocking(move || read_value(&path))
            .await
            .context("File store read was aborted")?
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.value_path(namespace, key);
        let value = value.to_string();
        tokio::task::spawn_blocking(move || write_value(&path, &value))
            .await
            .context("File store write was aborted")?
    }
}
