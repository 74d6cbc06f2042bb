//! Favourite vehicle records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// Earliest accepted launch year (Benz Patent-Motorwagen).
pub const LAUNCH_YEAR_MIN: i32 = 1886;
/// Latest accepted launch year.
pub const LAUNCH_YEAR_MAX: i32 = 2030;
/// Maximum length of `vehicle_name`.
pub const VEHICLE_NAME_MAX: usize = 100;
/// Maximum length of `reason`.
pub const VEHICLE_REASON_MAX: usize = 500;

/// A favourite vehicle owned by a user.
///
/// Carries creation/update timestamps; `launch_year` is bounded to
/// [`LAUNCH_YEAR_MIN`]..=[`LAUNCH_YEAR_MAX`] by the inbound validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub vehicle_name: String,
    pub type_of_vehicle: String,
    pub launch_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Build a record ready for insertion; timestamps are refreshed by the
    /// service on create.
    pub fn new(
        user_id: impl Into<String>,
        vehicle_name: impl Into<String>,
        type_of_vehicle: impl Into<String>,
        launch_year: i32,
        reason: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id: user_id.into(),
            vehicle_name: vehicle_name.into(),
            type_of_vehicle: type_of_vehicle.into(),
            launch_year,
            reason,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Favourite for Vehicle {
    type Patch = VehiclePatch;

    const COLLECTION: &'static str = "vehicles";
    const NOUN: &'static str = "favourite vehicle";
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

/// Partial update for [`Vehicle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_vehicle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FavouritePatch for VehiclePatch {
    fn is_empty(&self) -> bool {
        self.vehicle_name.is_none()
            && self.type_of_vehicle.is_none()
            && self.launch_year.is_none()
            && self.reason.is_none()
    }
}
