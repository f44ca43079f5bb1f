//! User directory port
//!
//! Identity is an external capability: the directory owns password hashing,
//! role storage, and session lookup. The core only consumes this interface
//! and never re-implements any of it.

use async_trait::async_trait;

use crate::domain::entities::{NewUser, UpdateUser, User, UserId};
use crate::error::DomainError;

/// External identity subsystem boundary
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user with the given password; Validation on rejected input
    async fn create_user(&self, user: &NewUser, password: &str) -> Result<User, DomainError>;

    /// Create the role if it does not already exist
    async fn ensure_role(&self, name: &str) -> Result<(), DomainError>;

    /// Assign an existing role to a user
    async fn assign_role(&self, user_id: &UserId, name: &str) -> Result<(), DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Resolve a session token hash to its user
    async fn find_by_session_hash(&self, hash: &str) -> Result<Option<User>, DomainError>;

    /// List all users in store-native order
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrite all profile fields of an existing user
    async fn update(&self, id: &UserId, user: &UpdateUser) -> Result<User, DomainError>;

    /// Delete a user; NotFound if absent
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
