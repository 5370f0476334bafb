use lakshya_core::platform::{Clock, IdGenerator, RandomIds, SystemClock};
use lakshya_storage::{DurableStore, FileStore, Repository};

use crate::config::AppConfig;

/// Everything a command needs: the repository plus the platform's id
/// generator and clock.
pub struct AppState<S = FileStore> {
    pub repo: Repository<S>,
    pub ids: Box<dyn IdGenerator>,
    pub clock: Box<dyn Clock>,
}

impl AppState<FileStore> {
    /// File-backed state rooted at the config's data directory.
    pub fn open(config: &AppConfig) -> Self {
        let data_dir = config.data_dir();
        tracing::info!(data_dir = %data_dir.display(), "opening diary store");
        Self::with_parts(FileStore::new(data_dir), RandomIds, SystemClock)
    }
}

impl<S: DurableStore> AppState<S> {
    pub fn with_parts(
        store: S,
        ids: impl IdGenerator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            repo: Repository::new(store),
            ids: Box::new(ids),
            clock: Box::new(clock),
        }
    }
}
