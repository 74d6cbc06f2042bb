//! Port abstraction for user persistence adapters.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::StoreError;
use crate::domain::user::User;

/// Async persistence port for the user collection.
///
/// Users are not owner-scoped: they ARE the owners. Deletion is by id
/// alone and does not cascade to favourites.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the store-assigned identifier.
    async fn insert(&self, user: &User) -> Result<ObjectId, StoreError>;

    /// Every stored user.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch one user by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError>;

    /// Fetch one user by email, used for the signup uniqueness check.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Remove a user by id; true when one was removed.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;
}
