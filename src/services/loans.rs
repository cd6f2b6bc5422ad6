//! Loan management service

use crate::{
    error::AppResult,
    models::{loan::LoanReceipt, user::UserLoans},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the titles a user currently holds
    pub fn get_user_loans(&self, user: &str) -> AppResult<UserLoans> {
        let borrowed = self
            .repository
            .read(|catalog| catalog.user_borrowed_books(user).map(<[String]>::to_vec))??;

        Ok(UserLoans {
            user: user.to_string(),
            borrowed,
        })
    }

    /// Lend one copy of a title to a user
    pub fn borrow_book(&self, user: &str, title: &str) -> AppResult<LoanReceipt> {
        let copies_left = self
            .repository
            .write(|catalog| catalog.borrow_book(user, title))??;

        tracing::info!("Loan: '{}' borrowed '{}' ({} left)", user, title, copies_left);
        Ok(LoanReceipt {
            user: user.to_string(),
            title: title.to_string(),
            copies_left,
        })
    }

    /// Take back a copy a user borrowed
    pub fn return_book(&self, user: &str, title: &str) -> AppResult<LoanReceipt> {
        let copies_left = self
            .repository
            .write(|catalog| catalog.return_book(user, title))??;

        tracing::info!("Loan: '{}' returned '{}' ({} on shelf)", user, title, copies_left);
        Ok(LoanReceipt {
            user: user.to_string(),
            title: title.to_string(),
            copies_left,
        })
    }
}
