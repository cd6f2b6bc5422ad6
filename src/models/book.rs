//! Book model and related types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::DEFAULT_COPIES;

/// A catalog title with the copies currently on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub copies: u64,
}

impl Book {
    /// Flatten a title -> copies map into a list, keeping its order
    pub fn from_map(books: IndexMap<String, u64>) -> Vec<Book> {
        books
            .into_iter()
            .map(|(title, copies)| Book { title, copies })
            .collect()
    }
}

/// Add book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    /// Initial number of copies, defaults to one
    #[serde(default = "default_copies")]
    pub copies: i64,
}

fn default_copies() -> i64 {
    DEFAULT_COPIES
}
