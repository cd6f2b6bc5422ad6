//! Catalog management service

use crate::{
    error::{AppResult, CatalogError},
    models::book::{Book, CreateBook},
    repository::Repository,
};

/// Catalog-wide counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTotals {
    pub total_copies: u64,
    pub titles: usize,
    pub users: usize,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Titles with at least one copy on the shelf
    pub fn available_books(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.read(|catalog| catalog.available_books())?;
        Ok(Book::from_map(books))
    }

    /// Get a tracked title, even when no copy is on the shelf
    pub fn get_book(&self, title: &str) -> AppResult<Book> {
        let copies = self
            .repository
            .read(|catalog| catalog.book_copies(title))?
            .ok_or_else(|| CatalogError::UnknownBook(title.to_string()))?;

        Ok(Book {
            title: title.to_string(),
            copies,
        })
    }

    /// Add a new title
    pub fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        let copies = self
            .repository
            .write(|catalog| catalog.add_book(&book.title, book.copies))??;

        tracing::info!("Catalog: added '{}' ({} copies)", book.title, copies);
        Ok(Book {
            title: book.title,
            copies,
        })
    }

    /// Remove a title, leaving any outstanding loans in place
    pub fn remove_book(&self, title: &str) -> AppResult<()> {
        self.repository
            .write(|catalog| catalog.remove_book(title))??;

        tracing::info!("Catalog: removed '{}'", title);
        Ok(())
    }

    pub fn totals(&self) -> AppResult<CatalogTotals> {
        self.repository.read(|catalog| CatalogTotals {
            total_copies: catalog.total_books_count(),
            titles: catalog.title_count(),
            users: catalog.user_count(),
        })
    }
}
