// src/store.rs
use crate::models::StockHolding;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("stock {0} not found")]
    NotFound(String),
}

/// In-memory mapping from holding id to holding, exclusively owned by this
/// process. Cloning the handle shares the same underlying map; all access is
/// serialized by the lock. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct StockStore {
    inner: Arc<RwLock<HashMap<String, StockHolding>>>,
}

impl StockStore {
    pub fn new() -> Self {
        StockStore::default()
    }

    /// Snapshot of every stored holding. Iteration order is the container
    /// default and carries no semantic meaning.
    pub async fn list(&self) -> Vec<StockHolding> {
        self.inner.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<StockHolding, StoreError> {
        self.inner
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Insert-or-overwrite; serves both create and full update.
    pub async fn put(&self, id: String, holding: StockHolding) {
        self.inner.write().await.insert(id, holding);
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
