//! Favourite music records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// A favourite piece of music. One of the two untimestamped resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    /// Store-assigned identifier.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Owning user; immutable after creation.
    pub user_id: String,
    /// Track or song title.
    pub music_name: String,
    /// Performing artist.
    pub singer: String,
    /// Free-text reason; may be empty.
    #[serde(default)]
    pub reason: String,
}

impl Music {
    /// Build a record ready for insertion (no id yet).
    pub fn new(
        user_id: impl Into<String>,
        music_name: impl Into<String>,
        singer: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            music_name: music_name.into(),
            singer: singer.into(),
            reason: reason.into(),
        }
    }
}

impl Favourite for Music {
    type Patch = MusicPatch;

    const COLLECTION: &'static str = "music";
    const NOUN: &'static str = "favourite music";
    const TIMESTAMPED: bool = false;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }

    fn stamp(&mut self, _at: DateTime<Utc>) {}
}

/// Partial update for [`Music`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FavouritePatch for MusicPatch {
    fn is_empty(&self) -> bool {
        self.music_name.is_none() && self.singer.is_none() && self.reason.is_none()
    }
}
