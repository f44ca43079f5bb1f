//! User domain entity
//!
//! Identity (passwords, roles, sessions) is owned by the user directory
//! adapter; the domain only sees the profile fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i32);

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A donor, requester, or staff member
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    /// Role name, e.g. "donor" or "admin"
    pub user_type: String,
    /// Free-text blood type on the profile (not a reference to `BloodType`)
    pub blood_type: String,
}

impl User {
    /// First and last name joined for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data needed to register a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    pub user_type: String,
    pub blood_type: String,
    /// Hash of the one-time session token issued at registration
    pub session_token_hash: String,
}

/// Full-field overwrite for an existing user profile
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    pub user_type: String,
    pub blood_type: String,
}
