//! Mongo-backed [`FavouriteRepository`] adapter.
//!
//! One generic adapter serves every favourite collection; the record shape
//! supplies the collection name and owner field through the [`Favourite`]
//! trait.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use super::MongoStore;
use crate::domain::favourite::{Favourite, OWNER_FIELD};
use crate::domain::ports::{FavouriteRepository, StoreError};

/// Classify a driver failure into the port's error taxonomy.
pub(super) fn map_driver_error(error: mongodb::error::Error) -> StoreError {
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            StoreError::connection(error.to_string())
        }
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            StoreError::serialization(error.to_string())
        }
        _ => StoreError::query(error.to_string()),
    }
}

/// Mongo adapter over one favourite collection.
#[derive(Clone)]
pub struct MongoFavouriteRepository<R: Favourite> {
    collection: Collection<R>,
}

impl<R: Favourite> MongoFavouriteRepository<R> {
    /// Bind the adapter to the record shape's collection in the store.
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.collection(R::COLLECTION),
        }
    }
}

#[async_trait]
impl<R: Favourite> FavouriteRepository<R> for MongoFavouriteRepository<R> {
    async fn insert(&self, record: &R) -> Result<ObjectId, StoreError> {
        let result = self
            .collection
            .insert_one(record)
            .await
            .map_err(map_driver_error)?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::query("insert did not yield an ObjectId"))
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<R>, StoreError> {
        let cursor = self
            .collection
            .find(doc! { OWNER_FIELD: owner_id })
            .await
            .map_err(map_driver_error)?;
        cursor.try_collect().await.map_err(map_driver_error)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<R>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_driver_error)
    }

    async fn apply_set(
        &self,
        id: ObjectId,
        owner_id: &str,
        set: Document,
    ) -> Result<Option<R>, StoreError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": id, OWNER_FIELD: owner_id },
                doc! { "$set": set },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_driver_error)
    }

    async fn delete(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id, OWNER_FIELD: owner_id })
            .await
            .map_err(map_driver_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, StoreError> {
        let count = self
            .collection
            .count_documents(doc! { "_id": id })
            .await
            .map_err(map_driver_error)?;
        Ok(count > 0)
    }

    async fn exists_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError> {
        let count = self
            .collection
            .count_documents(doc! { "_id": id, OWNER_FIELD: owner_id })
            .await
            .map_err(map_driver_error)?;
        Ok(count > 0)
    }
}
