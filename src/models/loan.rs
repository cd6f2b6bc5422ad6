//! Loan (borrow) model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Borrow or return request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoanRequest {
    pub user: String,
    pub title: String,
}

/// Outcome of a borrow or return
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanReceipt {
    pub user: String,
    pub title: String,
    /// Copies of the title left on the shelf after the operation
    pub copies_left: u64,
}
