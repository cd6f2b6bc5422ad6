//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Register user request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUser {
    /// Unique user identifier
    pub user: String,
}

/// Titles a user currently holds, in borrow order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserLoans {
    pub user: String,
    pub borrowed: Vec<String>,
}

/// Result of unregistering a user.
///
/// `unreturned` lists copies the user still held; they stay off the shelf.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnregisteredUser {
    pub user: String,
    pub unreturned: Vec<String>,
}
