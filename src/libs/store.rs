use std::sync::Arc;

use log::{info, warn};
use parking_lot::{Mutex, RwLock};

use super::dataset::Dataset;
use super::source::{DataSource, SourceError};

/// Holds the last successfully loaded dataset. Readers clone the `Arc` and keep
/// working on that snapshot while a reload swaps in a new one.
pub struct SnapshotStore {
    source: Box<dyn DataSource>,
    current: RwLock<Option<Arc<Dataset>>>,
    loading: Mutex<()>,
}

impl SnapshotStore {
    pub fn new(source: impl DataSource + 'static) -> Self {
        SnapshotStore {
            source: Box::new(source),
            current: RwLock::new(None),
            loading: Mutex::new(()),
        }
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current.read().clone()
    }

    /// The current snapshot, loading it first if nothing has been loaded yet.
    pub fn ensure_loaded(&self) -> Result<Arc<Dataset>, SourceError> {
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        let _guard = self.loading.lock();

        // Another caller may have finished the first load while we waited.
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        self.load_and_swap()
    }

    /// Full reload. On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<Arc<Dataset>, SourceError> {
        let _guard = self.loading.lock();

        self.load_and_swap().map_err(|e| {
            warn!("Reload of {} failed, keeping previous dataset: {}", self.location(), e);
            e
        })
    }

    fn load_and_swap(&self) -> Result<Arc<Dataset>, SourceError> {
        let snapshot = Arc::new(self.source.load()?);
        info!("Loaded {} rows from {}", snapshot.len(), self.location());

        *self.current.write() = Some(snapshot.clone());
        Ok(snapshot)
    }
}
