//! Generic service over one favourite collection.
//!
//! Instantiated once per resource type; all six favourite resources share
//! this implementation and differ only in their [`Favourite`] impls and the
//! per-resource validation performed by the inbound handlers.

use std::sync::Arc;

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson};

use crate::domain::favourite::{Favourite, FavouritePatch, UPDATED_AT_FIELD};
use crate::domain::ports::{FavouriteRepository, StoreError};
use crate::domain::Error;

/// Map a repository failure to a domain error.
///
/// Connectivity problems surface as service-unavailable; everything else is
/// an internal error. The inbound adapter redacts both before responding.
pub(crate) fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("document store unavailable: {message}"))
        }
        StoreError::Query { message } => {
            Error::internal(format!("document store error: {message}"))
        }
        StoreError::Serialization { message } => {
            Error::internal(format!("record serialisation failed: {message}"))
        }
    }
}

/// CRUD operations over one owned favourite collection.
pub struct FavouriteService<R: Favourite> {
    repo: Arc<dyn FavouriteRepository<R>>,
}

impl<R: Favourite> Clone for FavouriteService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: Favourite> FavouriteService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<dyn FavouriteRepository<R>>) -> Self {
        Self { repo }
    }

    fn not_found() -> Error {
        Error::not_found(format!("{} not found", R::NOUN))
    }

    fn wrong_owner() -> Error {
        Error::forbidden(format!("this {} belongs to another user", R::NOUN))
    }

    /// Stamp timestamps (when the resource carries them), insert, and
    /// return the stored record including its generated id.
    pub async fn create(&self, mut record: R) -> Result<R, Error> {
        // Stamp at the store's millisecond precision so the returned record
        // matches what a later read observes.
        record.stamp(bson::DateTime::now().to_chrono());
        let id = self.repo.insert(&record).await.map_err(map_store_error)?;
        record.assign_id(id);
        Ok(record)
    }

    /// All records owned by `owner_id`; an owner with no records yields an
    /// empty list, not an error.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<R>, Error> {
        self.repo
            .find_by_owner(owner_id)
            .await
            .map_err(map_store_error)
    }

    /// Fetch one record. Malformed id strings cannot name any stored
    /// record and read as absence rather than an error.
    pub async fn get(&self, id: &str) -> Result<Option<R>, Error> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        self.repo.find_by_id(oid).await.map_err(map_store_error)
    }

    /// Apply a partial update on behalf of `owner_id`.
    ///
    /// A read-before-write probe distinguishes not-found from forbidden;
    /// the mutation itself conjoins id AND owner in the filter, so a race
    /// with a concurrent delete matches zero documents and reads as
    /// not-found. `updatedAt` is always refreshed on timestamped resources.
    pub async fn update(&self, id: &str, owner_id: &str, patch: &R::Patch) -> Result<R, Error> {
        let oid = ObjectId::parse_str(id).map_err(|_| Self::not_found())?;
        let existing = self
            .repo
            .find_by_id(oid)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Self::not_found)?;
        if existing.owner_id() != owner_id {
            return Err(Self::wrong_owner());
        }

        if patch.is_empty() && !R::TIMESTAMPED {
            return Ok(existing);
        }

        let mut set = bson::to_document(patch)
            .map_err(|err| Error::internal(format!("failed to serialise patch: {err}")))?;
        if R::TIMESTAMPED {
            set.insert(
                UPDATED_AT_FIELD,
                Bson::DateTime(bson::DateTime::from_chrono(Utc::now())),
            );
        }

        self.repo
            .apply_set(oid, owner_id, set)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Self::not_found)
    }

    /// Remove one record on behalf of `owner_id` (owner-scoped uniformly).
    pub async fn delete(&self, id: &str, owner_id: &str) -> Result<(), Error> {
        let oid = ObjectId::parse_str(id).map_err(|_| Self::not_found())?;
        let existing = self
            .repo
            .find_by_id(oid)
            .await
            .map_err(map_store_error)?
            .ok_or_else(Self::not_found)?;
        if existing.owner_id() != owner_id {
            return Err(Self::wrong_owner());
        }

        let removed = self
            .repo
            .delete(oid, owner_id)
            .await
            .map_err(map_store_error)?;
        if removed {
            Ok(())
        } else {
            Err(Self::not_found())
        }
    }

    /// Count-based existence probe by id alone.
    pub async fn exists(&self, id: &str) -> Result<bool, Error> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        self.repo.exists(oid).await.map_err(map_store_error)
    }

    /// Count-based existence probe conjoined on id AND owner.
    pub async fn exists_for_owner(&self, id: &str, owner_id: &str) -> Result<bool, Error> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        self.repo
            .exists_for_owner(oid, owner_id)
            .await
            .map_err(map_store_error)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mongodb::bson::Document;

    use super::*;
    use crate::domain::game::{Game, GamePatch};
    use crate::domain::music::{Music, MusicPatch};
    use crate::domain::ports::MemoryFavouriteRepository;
    use crate::domain::ErrorCode;

    fn game_service() -> FavouriteService<Game> {
        FavouriteService::new(Arc::new(MemoryFavouriteRepository::new()))
    }

    fn music_service() -> FavouriteService<Music> {
        FavouriteService::new(Arc::new(MemoryFavouriteRepository::new()))
    }

    fn sample_game(owner: &str) -> Game {
        Game::new(owner, "Chess", "indoor", "strategy", false)
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_preserves_the_owner() {
        let service = game_service();

        let created = service.create(sample_game("u1")).await.expect("create");

        assert!(created.id.is_some());
        assert_eq!(created.user_id, "u1");
    }

    #[tokio::test]
    async fn created_ids_are_unique_across_calls() {
        let service = game_service();

        let first = service.create(sample_game("u1")).await.expect("create");
        let second = service.create(sample_game("u1")).await.expect("create");

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_by_owner_returns_only_that_owners_records() {
        let service = game_service();
        service.create(sample_game("u1")).await.expect("create");
        service.create(sample_game("u2")).await.expect("create");

        let listed = service.list_by_owner("u1").await.expect("list");

        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|game| game.user_id == "u1"));
    }

    #[tokio::test]
    async fn list_by_owner_with_no_records_is_an_empty_list() {
        let service = game_service();

        let listed = service.list_by_owner("nobody").await.expect("list");

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn round_trip_returns_the_created_record() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        let fetched = service.get(&id).await.expect("get").expect("present");

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_with_a_malformed_id_reads_as_absence() {
        let service = game_service();

        let fetched = service.get("not-an-object-id").await.expect("get");

        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        let patch = GamePatch {
            game_name: Some("Go".into()),
            ..GamePatch::default()
        };
        let updated = service.update(&id, "u1", &patch).await.expect("update");

        assert_eq!(updated.game_name, "Go");
        assert_eq!(updated.platform, created.platform);
        assert_eq!(updated.reason, created.reason);
        assert_eq!(updated.is_digital, created.is_digital);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.user_id, "u1");
    }

    #[tokio::test]
    async fn update_with_the_wrong_owner_is_forbidden_and_changes_nothing() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        let patch = GamePatch {
            game_name: Some("Go".into()),
            ..GamePatch::default()
        };
        let err = service
            .update(&id, "intruder", &patch)
            .await
            .expect_err("forbidden");
        assert_eq!(err.code(), ErrorCode::Forbidden);

        let fetched = service.get(&id).await.expect("get").expect("present");
        assert_eq!(fetched.game_name, "Chess");
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_not_found() {
        let service = game_service();

        let patch = GamePatch::default();
        let err = service
            .update(&ObjectId::new().to_hex(), "u1", &patch)
            .await
            .expect_err("not found");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_of_an_untimestamped_record_replaces_the_given_fields() {
        let service = music_service();
        let created = service
            .create(Music::new("u1", "Song", "Artist", "x"))
            .await
            .expect("create");
        let id = created.id.expect("id").to_hex();

        let patch = MusicPatch {
            music_name: Some("Other Song".into()),
            singer: Some("Other Artist".into()),
            reason: Some("y".into()),
        };
        let updated = service.update(&id, "u1", &patch).await.expect("update");

        assert_eq!(updated.music_name, "Other Song");
        assert_eq!(updated.singer, "Other Artist");
        assert_eq!(updated.reason, "y");
    }

    #[tokio::test]
    async fn empty_patch_on_an_untimestamped_record_changes_nothing() {
        let service = music_service();
        let created = service
            .create(Music::new("u1", "Song", "Artist", "x"))
            .await
            .expect("create");
        let id = created.id.expect("id").to_hex();

        let updated = service
            .update(&id, "u1", &MusicPatch::default())
            .await
            .expect("update");

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn delete_then_get_reads_as_absence() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        service.delete(&id, "u1").await.expect("delete");

        assert!(service.get(&id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn delete_with_the_wrong_owner_is_forbidden_and_keeps_the_record() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        let err = service.delete(&id, "intruder").await.expect_err("forbidden");
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(service.get(&id).await.expect("get").is_some());
    }

    #[tokio::test]
    async fn delete_with_a_malformed_id_is_not_found() {
        let service = game_service();

        let err = service.delete("nope", "u1").await.expect_err("not found");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn existence_probes_distinguish_owner_scope() {
        let service = game_service();
        let created = service.create(sample_game("u1")).await.expect("create");
        let id = created.id.expect("id").to_hex();

        assert!(service.exists(&id).await.expect("exists"));
        assert!(service
            .exists_for_owner(&id, "u1")
            .await
            .expect("exists for owner"));
        assert!(!service
            .exists_for_owner(&id, "intruder")
            .await
            .expect("exists for owner"));
        assert!(!service.exists("garbage").await.expect("exists"));
    }

    struct FailingRepository {
        error: StoreError,
    }

    #[async_trait]
    impl FavouriteRepository<Game> for FailingRepository {
        async fn insert(&self, _record: &Game) -> Result<ObjectId, StoreError> {
            Err(self.error.clone())
        }

        async fn find_by_owner(&self, _owner_id: &str) -> Result<Vec<Game>, StoreError> {
            Err(self.error.clone())
        }

        async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Game>, StoreError> {
            Err(self.error.clone())
        }

        async fn apply_set(
            &self,
            _id: ObjectId,
            _owner_id: &str,
            _set: Document,
        ) -> Result<Option<Game>, StoreError> {
            Err(self.error.clone())
        }

        async fn delete(&self, _id: ObjectId, _owner_id: &str) -> Result<bool, StoreError> {
            Err(self.error.clone())
        }

        async fn exists(&self, _id: ObjectId) -> Result<bool, StoreError> {
            Err(self.error.clone())
        }

        async fn exists_for_owner(
            &self,
            _id: ObjectId,
            _owner_id: &str,
        ) -> Result<bool, StoreError> {
            Err(self.error.clone())
        }
    }

    #[tokio::test]
    async fn connection_failures_map_to_service_unavailable() {
        let service = FavouriteService::new(Arc::new(FailingRepository {
            error: StoreError::connection("refused"),
        }));

        let err = service.list_by_owner("u1").await.expect_err("store down");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn query_failures_map_to_internal_errors() {
        let service = FavouriteService::new(Arc::new(FailingRepository {
            error: StoreError::query("broken"),
        }));

        let err = service
            .create(sample_game("u1"))
            .await
            .expect_err("store broken");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
