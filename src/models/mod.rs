//! Data models for Bookshelf

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use loan::{LoanReceipt, LoanRequest};
pub use user::{RegisterUser, UnregisteredUser, UserLoans};
