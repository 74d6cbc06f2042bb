//! User records.
//!
//! The stored record carries an argon2 password hash. The hash must never
//! reach a client: API handlers map [`User`] to a response DTO that has no
//! password field at all, so there is no serialisation path that could leak
//! it.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A signed-up user as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// Salted argon2 hash in PHC string form.
    pub password_hash: String,
}

/// Validated signup input, before hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
