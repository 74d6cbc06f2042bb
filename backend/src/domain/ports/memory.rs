//! In-memory port implementations.
//!
//! Back the same ports as the Mongo adapters with a mutex-guarded `Vec`,
//! for handler/service tests and local fixtures. Patch application goes
//! through the same BSON round-trip as the real store so both adapters
//! share one partial-update semantic.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document};

use super::{FavouriteRepository, StoreError, StoreHealth, UserRepository};
use crate::domain::favourite::Favourite;
use crate::domain::user::User;

fn recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// In-memory [`FavouriteRepository`] over one record shape.
#[derive(Default)]
pub struct MemoryFavouriteRepository<R> {
    records: Mutex<Vec<R>>,
}

impl<R: Favourite> MemoryFavouriteRepository<R> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<R: Favourite> FavouriteRepository<R> for MemoryFavouriteRepository<R> {
    async fn insert(&self, record: &R) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut stored = record.clone();
        stored.assign_id(id);
        recover(&self.records).push(stored);
        Ok(id)
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<R>, StoreError> {
        Ok(recover(&self.records)
            .iter()
            .filter(|record| record.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<R>, StoreError> {
        Ok(recover(&self.records)
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned())
    }

    async fn apply_set(
        &self,
        id: ObjectId,
        owner_id: &str,
        set: Document,
    ) -> Result<Option<R>, StoreError> {
        let mut records = recover(&self.records);
        let Some(slot) = records
            .iter_mut()
            .find(|record| record.id() == Some(id) && record.owner_id() == owner_id)
        else {
            return Ok(None);
        };

        let mut doc = bson::to_document(&*slot)
            .map_err(|err| StoreError::serialization(err.to_string()))?;
        for (key, value) in set {
            doc.insert(key, value);
        }
        let updated: R = bson::from_document(doc)
            .map_err(|err| StoreError::serialization(err.to_string()))?;
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError> {
        let mut records = recover(&self.records);
        let before = records.len();
        records.retain(|record| !(record.id() == Some(id) && record.owner_id() == owner_id));
        Ok(records.len() < before)
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, StoreError> {
        Ok(recover(&self.records)
            .iter()
            .any(|record| record.id() == Some(id)))
    }

    async fn exists_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, StoreError> {
        Ok(recover(&self.records)
            .iter()
            .any(|record| record.id() == Some(id) && record.owner_id() == owner_id))
    }
}

/// In-memory [`UserRepository`].
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        recover(&self.users).push(stored);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(recover(&self.users).clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        Ok(recover(&self.users)
            .iter()
            .find(|user| user.id == Some(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(recover(&self.users)
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let mut users = recover(&self.users);
        let before = users.len();
        users.retain(|user| user.id != Some(id));
        Ok(users.len() < before)
    }
}

/// Always-reachable [`StoreHealth`] for tests and fixtures.
pub struct MemoryStoreHealth;

#[async_trait]
impl StoreHealth for MemoryStoreHealth {
    async fn ping(&self) -> Result<Duration, StoreError> {
        Ok(Duration::ZERO)
    }
}
