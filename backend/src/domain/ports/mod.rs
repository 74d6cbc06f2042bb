//! Domain ports for the hexagonal boundary.

mod favourite_repository;
mod memory;
mod store_health;
mod user_repository;

pub use favourite_repository::{FavouriteRepository, StoreError};
pub use memory::{MemoryFavouriteRepository, MemoryStoreHealth, MemoryUserRepository};
pub use store_health::StoreHealth;
pub use user_repository::UserRepository;
