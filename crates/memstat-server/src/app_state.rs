//! Shared application state for the memstat server.
//!
//! The metric store is constructed here once and handed to every request
//! handler through axum `State`; there is no process-wide static.

use std::sync::Arc;

use memstat_core::MemStorage;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<MemStorage>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build application state with a fresh, empty store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(MemStorage::new()))
    }

    /// Build application state around an existing store.
    pub fn with_store(cfg: ServerConfig, store: Arc<MemStorage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            store,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<MemStorage> {
        Arc::clone(&self.store)
    }
}
