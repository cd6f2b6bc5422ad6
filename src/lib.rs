//! Bookshelf Library Catalog
//!
//! An in-memory library catalog tracking book copies, registered users and
//! their loans, served over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult, CatalogError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state around a catalog
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let repository = repository::Repository::new(catalog);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
