//! Shared handle to the in-memory catalog

use std::sync::{Arc, Mutex};

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
};

/// Cloneable handle to one catalog behind a single lock.
///
/// Every operation takes the lock once and runs to completion while holding
/// it, so callers always observe the catalog between whole operations.
#[derive(Clone, Default)]
pub struct Repository {
    catalog: Arc<Mutex<Catalog>>,
}

impl Repository {
    /// Create a repository around an existing catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run `f` with shared access to the catalog
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> AppResult<R> {
        let guard = self.catalog.lock().map_err(|_| poisoned())?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access to the catalog
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> AppResult<R> {
        let mut guard = self.catalog.lock().map_err(|_| poisoned())?;
        Ok(f(&mut guard))
    }
}

fn poisoned() -> AppError {
    AppError::Internal("catalog lock poisoned".to_string())
}
