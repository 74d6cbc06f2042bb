//! The owned-document abstraction shared by every favourite collection.
//!
//! Each favourite resource (music, vehicles, games, ...) is a flat record
//! owned by a user. The per-resource differences — collection name, field
//! set, whether the record carries timestamps — are captured here so the
//! service, repository, and handlers can be written once and instantiated
//! per resource.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// BSON field holding the owning user's identifier, shared by every
/// favourite collection.
pub const OWNER_FIELD: &str = "userId";

/// BSON field holding the last-modified timestamp on timestamped records.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// A record shape stored in one favourite collection and owned by a user.
///
/// ## Invariants
/// - `owner_id` is immutable after creation; no patch type exposes it.
/// - `id` is `None` until the store assigns one on insert.
pub trait Favourite:
    Clone + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static
{
    /// Partial-update shape; only present fields are applied.
    type Patch: FavouritePatch;

    /// Logical collection name in the document store.
    const COLLECTION: &'static str;

    /// Singular noun used in messages, e.g. "favourite music".
    const NOUN: &'static str;

    /// Whether the record carries `createdAt`/`updatedAt` timestamps.
    const TIMESTAMPED: bool;

    /// Store-assigned identifier, if the record has been inserted.
    fn id(&self) -> Option<ObjectId>;

    /// Record the store-assigned identifier after insertion.
    fn assign_id(&mut self, id: ObjectId);

    /// The owning user's identifier.
    fn owner_id(&self) -> &str;

    /// Set both timestamps to `at`. No-op for untimestamped resources.
    fn stamp(&mut self, at: DateTime<Utc>);
}

/// Partial update over a [`Favourite`] record.
///
/// Serialising a patch must yield only the fields to change (absent fields
/// are skipped), so the serialised form can be used directly as a `$set`
/// document.
pub trait FavouritePatch: Serialize + Send + Sync {
    /// True when no field is present and the patch would change nothing.
    fn is_empty(&self) -> bool;
}
