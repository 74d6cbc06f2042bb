//! Port abstraction for favourite-collection persistence adapters.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;

use crate::domain::favourite::Favourite;

/// Persistence errors raised by repository adapters.
///
/// Absence and zero-rows-affected are ordinary return values, not errors;
/// these variants cover the store itself misbehaving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("document store connection failed: {message}")]
    Connection { message: String },

    /// A query or mutation failed during execution.
    #[error("document store query failed: {message}")]
    Query { message: String },

    /// A record could not be converted to or from its stored form.
    #[error("document (de)serialisation failed: {message}")]
    Serialization { message: String },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a serialisation error with the given message.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Async persistence port for one favourite collection.
///
/// Mutating operations conjoin the record id AND the owner id in their
/// filters, so a mismatched owner matches zero documents; this is the only
/// atomic ownership guard.
#[async_trait]
pub trait FavouriteRepository<R: Favourite>: Send + Sync {
    /// Insert a record and return the store-assigned identifier.
    async fn insert(&self, record: &R) -> Result<ObjectId, StoreError>;

    /// All records owned by `owner_id`, in store-native order.
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<R>, StoreError>;

    /// Fetch one record by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<R>, StoreError>;

    /// Apply a `$set` of the given fields to the record matching id AND
    /// owner, returning the post-update record (None when nothing matched).
    async fn apply_set(
        &self,
        id: ObjectId,
        owner_id: &str,
        set: Document,
    ) -> Result<Option<R>, StoreError>;

    /// Remove the record matching id AND owner; true when one was removed.
    async fn delete(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError>;

    /// Count-based existence probe by id alone.
    async fn exists(&self, id: ObjectId) -> Result<bool, StoreError>;

    /// Count-based existence probe conjoined on id AND owner.
    async fn exists_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError>;
}
