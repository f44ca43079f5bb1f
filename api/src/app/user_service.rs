//! User service
//!
//! Registration and profile management on top of the user directory port.
//! The directory owns passwords and roles; this service validates input,
//! drives the role flow, and issues the one-time session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{NewUser, UpdateUser, User, UserId};
use crate::domain::ports::UserDirectory;
use crate::error::{AppError, DomainError};

/// Generate a random session token (shown once at registration)
pub fn generate_session_token() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Hash a session token for storage and lookup
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Input for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    pub user_type: String,
    pub blood_type: String,
}

/// Service for user registration and profiles
pub struct UserService<UD>
where
    UD: UserDirectory,
{
    directory: Arc<UD>,
}

impl<UD> UserService<UD>
where
    UD: UserDirectory,
{
    pub fn new(directory: Arc<UD>) -> Self {
        Self { directory }
    }

    /// Register a new user
    ///
    /// Creates the user through the directory, ensures and assigns the role
    /// named by `user_type`, and issues a session token.
    ///
    /// Returns (user, session_token) - the token is only shown once.
    pub async fn register(&self, input: RegisterUser) -> Result<(User, String), AppError> {
        require(&input.first_name, "first_name", "First name is required.")?;
        require(&input.last_name, "last_name", "Last name is required.")?;
        require(&input.user_name, "user_name", "Username is required.")?;
        require(&input.password, "password", "Password is required.")?;
        require(&input.user_type, "user_type", "User type is required.")?;

        let token = generate_session_token();
        let token_hash = hash_session_token(&token);

        let new_user = NewUser {
            first_name: input.first_name,
            last_name: input.last_name,
            user_name: input.user_name,
            email: input.email,
            phone_number: input.phone_number,
            gender: input.gender,
            address: input.address,
            last_donation_date: input.last_donation_date,
            date_of_birth: input.date_of_birth,
            user_type: input.user_type.clone(),
            blood_type: input.blood_type,
            session_token_hash: token_hash,
        };

        let user = self.directory.create_user(&new_user, &input.password).await?;

        self.directory.ensure_role(&input.user_type).await?;
        self.directory.assign_role(&user.id, &input.user_type).await?;

        Ok((user, token))
    }

    /// Resolve a session token hash to its user
    pub async fn find_by_session(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        Ok(self.directory.find_by_session_hash(token_hash).await?)
    }

    /// Get one user; None if absent
    pub async fn get(&self, id: &UserId) -> Result<Option<User>, AppError> {
        Ok(self.directory.find_by_id(id).await?)
    }

    /// List all users in store-native order
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.directory.list_all().await?)
    }

    /// Overwrite all profile fields of an existing user
    pub async fn update(&self, id: &UserId, update: UpdateUser) -> Result<User, AppError> {
        Ok(self.directory.update(id, &update).await?)
    }

    /// Delete a user
    pub async fn delete(&self, id: &UserId) -> Result<(), AppError> {
        Ok(self.directory.delete(id).await?)
    }
}

fn require(value: &str, field: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Domain(DomainError::validation(field, message)));
    }
    Ok(())
}
