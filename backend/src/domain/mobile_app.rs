//! Favourite mobile app records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// Canonical platform names for mobile apps.
pub const MOBILE_PLATFORMS: [&str; 2] = ["Android", "iOS"];

/// Match a caller-supplied platform case-insensitively against
/// [`MOBILE_PLATFORMS`], returning the canonical spelling.
pub fn canonical_mobile_platform(value: &str) -> Option<&'static str> {
    MOBILE_PLATFORMS
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(value))
        .copied()
}

/// A favourite mobile app owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileApp {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub app_name: String,
    /// One of [`MOBILE_PLATFORMS`], canonicalised on the way in.
    pub platform: String,
    pub category: String,
    pub reason: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl MobileApp {
    /// Build a record ready for insertion; timestamps are refreshed by the
    /// service on create.
    pub fn new(
        user_id: impl Into<String>,
        app_name: impl Into<String>,
        platform: impl Into<String>,
        category: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            app_name: app_name.into(),
            platform: platform.into(),
            category: category.into(),
            reason: reason.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Favourite for MobileApp {
    type Patch = MobileAppPatch;

    const COLLECTION: &'static str = "mobileApps";
    const NOUN: &'static str = "mobile app";
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

/// Partial update for [`MobileApp`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FavouritePatch for MobileAppPatch {
    fn is_empty(&self) -> bool {
        self.app_name.is_none()
            && self.platform.is_none()
            && self.category.is_none()
            && self.reason.is_none()
    }
}
