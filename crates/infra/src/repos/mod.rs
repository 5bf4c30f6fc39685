mod dedup;
mod history;
mod kv;
mod recovery_queue;
mod session;
mod shared;

pub use dedup::DedupRepo;
pub use history::HistoryRepo;
pub use kv::{FileKeyValueStore, IKeyValueStore, InMemoryKeyValueStore};
pub use recovery_queue::{RecoveryQueueListing, RecoveryQueueRepo};
pub use session::SessionRepo;
pub use shared::json_collection::JsonCollection;

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// The persisted stores of the scheduler. Each one guards itself with its
/// own lock, none of them is ever locked while another one is accessed.
#[derive(Clone)]
pub struct Repos {
    pub dedup_tickets: Arc<DedupRepo>,
    pub history: Arc<HistoryRepo>,
    pub recovery_queue: Arc<RecoveryQueueRepo>,
    pub session: Arc<SessionRepo>,
}

impl Repos {
    pub fn create(store: Arc<dyn IKeyValueStore>) -> Self {
        Self {
            dedup_tickets: Arc::new(DedupRepo::new(store.clone())),
            history: Arc::new(HistoryRepo::new(store.clone())),
            recovery_queue: Arc::new(RecoveryQueueRepo::new(store.clone())),
            session: Arc::new(SessionRepo::new(store)),
        }
    }

    pub fn create_file(root: PathBuf) -> Self {
        info!("Persisting reminder state in {}", root.display());
        Self::create(Arc::new(FileKeyValueStore::new(root)))
    }

    pub fn create_inmemory() -> Self {
        Self::create(Arc::new(InMemoryKeyValueStore::new()))
    }
}
