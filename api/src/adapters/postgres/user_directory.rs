//! PostgreSQL adapter for the user directory
//!
//! This adapter is the identity subsystem: it owns password hashing, role
//! storage, and session lookup. Nothing above this layer touches those
//! concerns.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use sha2::{Digest, Sha256};

use crate::domain::entities::{NewUser, UpdateUser, User, UserId};
use crate::domain::ports::UserDirectory;
use crate::entity::{roles, user_roles, users};
use crate::error::DomainError;

/// Hash a password for storage (SHA-256, hex encoded)
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// PostgreSQL implementation of UserDirectory
pub struct PostgresUserDirectory {
    db: DatabaseConnection,
}

impl PostgresUserDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn create_user(&self, user: &NewUser, password: &str) -> Result<User, DomainError> {
        // User names must be unique within the directory
        let existing = users::Entity::find()
            .filter(users::Column::UserName.eq(user.user_name.clone()))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if existing.is_some() {
            return Err(DomainError::validation(
                "user_name",
                "Username is already taken.",
            ));
        }

        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            user_name: Set(user.user_name.clone()),
            email: Set(user.email.clone()),
            phone_number: Set(user.phone_number.clone()),
            gender: Set(user.gender.clone()),
            address: Set(user.address.clone()),
            create_date: Set(now),
            update_date: Set(now),
            last_donation_date: Set(user.last_donation_date.map(|d| d.fixed_offset())),
            date_of_birth: Set(user.date_of_birth.fixed_offset()),
            user_type: Set(user.user_type.clone()),
            blood_type: Set(user.blood_type.clone()),
            password_hash: Set(hash_password(password)),
            session_token_hash: Set(Some(user.session_token_hash.clone())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn ensure_role(&self, name: &str) -> Result<(), DomainError> {
        let existing = roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if existing.is_none() {
            roles::ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        Ok(())
    }

    async fn assign_role(&self, user_id: &UserId, name: &str) -> Result<(), DomainError> {
        let role = roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::Internal(format!("Role '{}' does not exist", name)))?;

        let already = user_roles::Entity::find()
            .filter(user_roles::Column::UserId.eq(user_id.0))
            .filter(user_roles::Column::RoleId.eq(role.id))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if already.is_none() {
            user_roles::ActiveModel {
                user_id: Set(user_id.0),
                role_id: Set(role.id),
            }
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_session_hash(&self, hash: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::SessionTokenHash.eq(hash))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: &UserId, user: &UpdateUser) -> Result<User, DomainError> {
        let existing = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))?;

        let mut active_model = existing.into_active_model();
        active_model.first_name = Set(user.first_name.clone());
        active_model.last_name = Set(user.last_name.clone());
        active_model.user_name = Set(user.user_name.clone());
        active_model.email = Set(user.email.clone());
        active_model.phone_number = Set(user.phone_number.clone());
        active_model.gender = Set(user.gender.clone());
        active_model.address = Set(user.address.clone());
        active_model.update_date = Set(Utc::now().fixed_offset());
        active_model.last_donation_date = Set(user.last_donation_date.map(|d| d.fixed_offset()));
        active_model.date_of_birth = Set(user.date_of_birth.fixed_offset());
        active_model.user_type = Set(user.user_type.clone());
        active_model.blood_type = Set(user.blood_type.clone());

        let result = active_model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let result = users::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("User {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            user_name: model.user_name,
            email: model.email,
            phone_number: model.phone_number,
            gender: model.gender,
            address: model.address,
            create_date: model.create_date.with_timezone(&Utc),
            update_date: model.update_date.with_timezone(&Utc),
            last_donation_date: model.last_donation_date.map(|d| d.with_timezone(&Utc)),
            date_of_birth: model.date_of_birth.with_timezone(&Utc),
            user_type: model.user_type,
            blood_type: model.blood_type,
        }
    }
}
