//! Mongo-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use super::mongo_favourite_repository::map_driver_error;
use super::MongoStore;
use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::user::User;

const COLLECTION: &str = "users";

/// Mongo adapter over the `users` collection.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Bind the adapter to the user collection in the store.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: &User) -> Result<ObjectId, StoreError> {
        let result = self
            .collection
            .insert_one(user)
            .await
            .map_err(map_driver_error)?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::query("insert did not yield an ObjectId"))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_driver_error)?;
        cursor.try_collect().await.map_err(map_driver_error)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_driver_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(map_driver_error)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_driver_error)?;
        Ok(result.deleted_count > 0)
    }
}
