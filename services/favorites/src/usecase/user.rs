use chrono::Utc;
use tracing::info;

use holonet_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, validate_email};
use crate::error::FavoritesError;
use crate::password::hash_password;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
    pub min_password_length: usize,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, FavoritesError> {
        if !validate_email(&input.email) {
            return Err(FavoritesError::InvalidEmail);
        }
        if input.password.chars().count() < self.min_password_length {
            return Err(FavoritesError::WeakPassword {
                min_length: self.min_password_length,
            });
        }
        let new_user = NewUser {
            email: input.email,
            password_hash: hash_password(&input.password)?,
            is_active: true,
            first_name: input.first_name,
            last_name: input.last_name,
            subscribed_at: Utc::now(),
        };
        let user = self.repo.create(&new_user).await?;
        info!(user_id = %user.id, "created user");
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, FavoritesError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(FavoritesError::UserNotFound)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Returns the number of favorites removed along with the user.
    pub async fn execute(&self, user_id: UserId) -> Result<u64, FavoritesError> {
        let removed = self
            .repo
            .delete(user_id)
            .await?
            .ok_or(FavoritesError::UserNotFound)?;
        info!(user_id = %user_id, favorites_removed = removed, "deleted user");
        Ok(removed)
    }
}
