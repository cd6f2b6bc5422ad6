//! User registration service

use crate::{
    error::AppResult,
    models::user::{UnregisteredUser, UserLoans},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user
    pub fn register_user(&self, user: &str) -> AppResult<UserLoans> {
        self.repository
            .write(|catalog| catalog.register_user(user))??;

        tracing::info!("Registered user '{}'", user);
        Ok(UserLoans {
            user: user.to_string(),
            borrowed: Vec::new(),
        })
    }

    /// Unregister a user.
    ///
    /// Copies the user still holds are not returned to the shelf; they are
    /// reported back so the caller can follow up.
    pub fn unregister_user(&self, user: &str) -> AppResult<UnregisteredUser> {
        let unreturned = self
            .repository
            .write(|catalog| catalog.unregister_user(user))??;

        if unreturned.is_empty() {
            tracing::info!("Unregistered user '{}'", user);
        } else {
            tracing::warn!(
                "Unregistered user '{}' still holding {} copies: {:?}",
                user,
                unreturned.len(),
                unreturned
            );
        }

        Ok(UnregisteredUser {
            user: user.to_string(),
            unreturned,
        })
    }
}
