//! In-memory catalog of books, registered users and their loans
//!
//! The catalog is the single owner of all library state. Every operation
//! validates its preconditions before touching anything, so a failed call
//! leaves the catalog exactly as it was.

use indexmap::IndexMap;

use crate::error::{CatalogError, Unavailable};

/// Number of copies added when a caller does not specify one
pub const DEFAULT_COPIES: i64 = 1;

/// Books, users and outstanding loans
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    /// Title -> copies currently on the shelf
    books: IndexMap<String, u64>,
    /// Registered user -> titles they currently hold, in borrow order.
    /// A user is registered exactly when they have an entry here.
    loans: IndexMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with an empty borrow list
    pub fn register_user(&mut self, user: &str) -> Result<(), CatalogError> {
        if self.loans.contains_key(user) {
            return Err(CatalogError::DuplicateUser(user.to_string()));
        }
        self.loans.insert(user.to_string(), Vec::new());
        Ok(())
    }

    /// Unregister a user and drop their borrow list.
    ///
    /// Copies the user still holds are *not* put back on the shelf. The
    /// dropped list is returned so the caller can decide what to do with
    /// those copies.
    pub fn unregister_user(&mut self, user: &str) -> Result<Vec<String>, CatalogError> {
        self.loans
            .shift_remove(user)
            .ok_or_else(|| CatalogError::UnknownUser(user.to_string()))
    }

    /// Add a new title with `copies` copies on the shelf, returning the
    /// stored count.
    ///
    /// Copies on the shelf plus copies out on loan never exceed `u64::MAX`,
    /// so totals can always be computed.
    pub fn add_book(&mut self, title: &str, copies: i64) -> Result<u64, CatalogError> {
        if self.books.contains_key(title) {
            return Err(CatalogError::DuplicateBook(title.to_string()));
        }
        let copies = u64::try_from(copies)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                CatalogError::InvalidArgument("number of copies must be positive".to_string())
            })?;
        self.copies_in_circulation()
            .and_then(|total| total.checked_add(copies))
            .ok_or_else(|| {
                CatalogError::InvalidArgument("number of copies is too large".to_string())
            })?;
        self.books.insert(title.to_string(), copies);
        Ok(copies)
    }

    /// Remove a title from the catalog.
    ///
    /// Outstanding loans of the title are left in the borrowers' lists.
    pub fn remove_book(&mut self, title: &str) -> Result<(), CatalogError> {
        self.books
            .shift_remove(title)
            .map(|_| ())
            .ok_or_else(|| CatalogError::UnknownBook(title.to_string()))
    }

    /// Lend one copy of `title` to `user`, returning the copies left
    pub fn borrow_book(&mut self, user: &str, title: &str) -> Result<u64, CatalogError> {
        let borrowed = self
            .loans
            .get_mut(user)
            .ok_or_else(|| CatalogError::UnknownUser(user.to_string()))?;

        let copies = match self.books.get_mut(title) {
            Some(copies) if *copies > 0 => copies,
            _ => {
                return Err(CatalogError::BookUnavailable {
                    title: title.to_string(),
                    reason: Unavailable::NoCopies,
                })
            }
        };

        *copies -= 1;
        borrowed.push(title.to_string());
        Ok(*copies)
    }

    /// Take back one copy of `title` from `user`, returning the copies now
    /// on the shelf
    pub fn return_book(&mut self, user: &str, title: &str) -> Result<u64, CatalogError> {
        let borrowed = self
            .loans
            .get_mut(user)
            .ok_or_else(|| CatalogError::UnknownUser(user.to_string()))?;

        let position = borrowed
            .iter()
            .position(|t| t == title)
            .ok_or_else(|| CatalogError::BookUnavailable {
                title: title.to_string(),
                reason: Unavailable::NotBorrowedBy(user.to_string()),
            })?;

        // The title may have been removed while the copy was out
        let copies = self
            .books
            .get_mut(title)
            .ok_or_else(|| CatalogError::UnknownBook(title.to_string()))?;

        *copies += 1;
        borrowed.remove(position);
        Ok(*copies)
    }

    /// Snapshot of titles with at least one copy on the shelf
    pub fn available_books(&self) -> IndexMap<String, u64> {
        self.books
            .iter()
            .filter(|(_, copies)| **copies > 0)
            .map(|(title, &copies)| (title.clone(), copies))
            .collect()
    }

    /// Titles currently held by `user`, in the order they were borrowed
    pub fn user_borrowed_books(&self, user: &str) -> Result<&[String], CatalogError> {
        self.loans
            .get(user)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::UnknownUser(user.to_string()))
    }

    /// Sum of the copies on the shelf across every tracked title
    pub fn total_books_count(&self) -> u64 {
        self.books.values().fold(0, |total, &n| total.saturating_add(n))
    }

    /// Copies on the shelf plus copies out on loan, `None` on overflow
    fn copies_in_circulation(&self) -> Option<u64> {
        let lent = self.loans.values().map(Vec::len).sum::<usize>();
        self.books
            .values()
            .try_fold(u64::try_from(lent).ok()?, |total, &n| total.checked_add(n))
    }

    /// Copies on the shelf for a tracked title, including zero
    pub fn book_copies(&self, title: &str) -> Option<u64> {
        self.books.get(title).copied()
    }

    pub fn is_registered(&self, user: &str) -> bool {
        self.loans.contains_key(user)
    }

    pub fn title_count(&self) -> usize {
        self.books.len()
    }

    pub fn user_count(&self) -> usize {
        self.loans.len()
    }
}
