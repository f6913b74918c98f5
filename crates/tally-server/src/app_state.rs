//! Shared application state.
//!
//! The counter store is owned here and handed to handlers through axum's
//! `State` extractor; nothing lives in a global.

use std::sync::Arc;

use tally_core::CounterStore;

use crate::config::ServerConfig;
use crate::obs::metrics::{Gauge, ServerMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: CounterStore,
    metrics: ServerMetrics,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let store = CounterStore::new(cfg.store.max_name_bytes);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &CounterStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Gauges read from state at render time rather than tracked incrementally.
    pub fn gauges(&self) -> Vec<Gauge> {
        vec![Gauge {
            name: "tally_counters",
            help: "Live counters in the store.",
            value: self.store().len() as u64,
        }]
    }
}
