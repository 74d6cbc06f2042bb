//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports and remain testable without a live
//! store.

use std::sync::Arc;

use crate::domain::ports::{
    MemoryFavouriteRepository, MemoryStoreHealth, MemoryUserRepository, StoreHealth,
};
use crate::domain::{
    FavouriteService, Game, MobileApp, Music, ProgrammingLanguage, UserService, Vehicle,
    YouTubeChannel,
};
use crate::outbound::persistence::{MongoFavouriteRepository, MongoStore, MongoUserRepository};

/// Dependency bundle for HTTP handlers: one service per resource plus the
/// store reachability probe used by `/health`.
#[derive(Clone)]
pub struct AppState {
    pub music: FavouriteService<Music>,
    pub vehicles: FavouriteService<Vehicle>,
    pub games: FavouriteService<Game>,
    pub mobile_apps: FavouriteService<MobileApp>,
    pub youtube_channels: FavouriteService<YouTubeChannel>,
    pub programming_languages: FavouriteService<ProgrammingLanguage>,
    pub users: UserService,
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Wire every service to the document store.
    pub fn mongo(store: &MongoStore) -> Self {
        Self {
            music: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(store))),
            vehicles: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(store))),
            games: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(store))),
            mobile_apps: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(store))),
            youtube_channels: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(store))),
            programming_languages: FavouriteService::new(Arc::new(MongoFavouriteRepository::new(
                store,
            ))),
            users: UserService::new(Arc::new(MongoUserRepository::new(store))),
            store_health: Arc::new(store.clone()),
        }
    }

    /// Wire every service to in-memory adapters, for tests and local
    /// experiments without a store.
    pub fn in_memory() -> Self {
        Self {
            music: FavouriteService::new(Arc::new(MemoryFavouriteRepository::new())),
            vehicles: FavouriteService::new(Arc::new(MemoryFavouriteRepository::new())),
            games: FavouriteService::new(Arc::new(MemoryFavouriteRepository::new())),
            mobile_apps: FavouriteService::new(Arc::new(MemoryFavouriteRepository::new())),
            youtube_channels: FavouriteService::new(Arc::new(MemoryFavouriteRepository::new())),
            programming_languages: FavouriteService::new(Arc::new(
                MemoryFavouriteRepository::new(),
            )),
            users: UserService::new(Arc::new(MemoryUserRepository::new())),
            store_health: Arc::new(MemoryStoreHealth),
        }
    }
}
