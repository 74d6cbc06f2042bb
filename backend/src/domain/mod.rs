//! Domain entities, ports, and services.
//!
//! Purpose: define the owned-document resource abstraction, the per-resource
//! record shapes, and the services that enforce ownership semantics. Keep
//! everything here transport agnostic; the inbound HTTP adapter owns status
//! codes and the response envelope, the outbound adapters own the store.

pub mod error;
pub mod favourite;
pub mod favourite_service;
pub mod game;
pub mod mobile_app;
pub mod music;
pub mod ports;
pub mod programming_language;
pub mod user;
pub mod user_service;
pub mod vehicle;
pub mod youtube_channel;

pub use self::error::{Error, ErrorCode};
pub use self::favourite::{Favourite, FavouritePatch};
pub use self::favourite_service::FavouriteService;
pub use self::game::{Game, GamePatch, GAME_PLATFORMS};
pub use self::mobile_app::{canonical_mobile_platform, MobileApp, MobileAppPatch, MOBILE_PLATFORMS};
pub use self::music::{Music, MusicPatch};
pub use self::programming_language::{ProgrammingLanguage, ProgrammingLanguagePatch};
pub use self::user::{NewUser, User};
pub use self::user_service::UserService;
pub use self::vehicle::{
    Vehicle, VehiclePatch, LAUNCH_YEAR_MAX, LAUNCH_YEAR_MIN, VEHICLE_NAME_MAX, VEHICLE_REASON_MAX,
};
pub use self::youtube_channel::{YouTubeChannel, YouTubeChannelPatch};
