//! Persistence adapters backed by the document store.

mod client;
mod mongo_favourite_repository;
mod mongo_user_repository;

pub use client::{MongoStore, StoreConfig};
pub use mongo_favourite_repository::MongoFavouriteRepository;
pub use mongo_user_repository::MongoUserRepository;
