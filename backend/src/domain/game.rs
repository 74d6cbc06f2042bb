//! Favourite game records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// Accepted values for the game `platform` field.
pub const GAME_PLATFORMS: [&str; 2] = ["indoor", "outdoor"];

/// A favourite game owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub game_name: String,
    /// One of [`GAME_PLATFORMS`].
    pub platform: String,
    pub reason: String,
    pub is_digital: bool,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Build a record ready for insertion; timestamps are refreshed by the
    /// service on create.
    pub fn new(
        user_id: impl Into<String>,
        game_name: impl Into<String>,
        platform: impl Into<String>,
        reason: impl Into<String>,
        is_digital: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            game_name: game_name.into(),
            platform: platform.into(),
            reason: reason.into(),
            is_digital,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Favourite for Game {
    type Patch = GamePatch;

    const COLLECTION: &'static str = "games";
    const NOUN: &'static str = "game";
    const TIMESTAMPED: bool = true;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }

    fn stamp(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
        self.updated_at = at;
    }
}

/// Partial update for [`Game`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_digital: Option<bool>,
}

impl FavouritePatch for GamePatch {
    fn is_empty(&self) -> bool {
        self.game_name.is_none()
            && self.platform.is_none()
            && self.reason.is_none()
            && self.is_digital.is_none()
    }
}
