//! Favourite YouTube channel records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// A favourite YouTube channel owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeChannel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub channel_name: String,
    pub creator_name: String,
    pub genre: String,
    /// Free-text reason; may be empty.
    #[serde(default)]
    pub reason: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl YouTubeChannel {
    /// Build a record ready for insertion; timestamps are refreshed by the
    /// service on create.
    pub fn new(
        user_id: impl Into<String>,
        channel_name: impl Into<String>,
        creator_name: impl Into<String>,
        genre: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            channel_name: channel_name.into(),
            creator_name: creator_name.into(),
            genre: genre.into(),
            reason: reason.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Favourite for YouTubeChannel {
    type Patch = YouTubeChannelPatch;

    const COLLECTION: &'static str = "youtubeChannels";
    const NOUN: &'static str = "YouTube channel";
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

/// Partial update for [`YouTubeChannel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeChannelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FavouritePatch for YouTubeChannelPatch {
    fn is_empty(&self) -> bool {
        self.channel_name.is_none()
            && self.creator_name.is_none()
            && self.genre.is_none()
            && self.reason.is_none()
    }
}
