//! Favourite programming language records.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::favourite::{Favourite, FavouritePatch};

/// A favourite programming language. Untimestamped, like [`super::Music`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingLanguage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub language_name: String,
    pub use_case: String,
    pub reason: String,
}

impl ProgrammingLanguage {
    /// Build a record ready for insertion (no id yet).
    pub fn new(
        user_id: impl Into<String>,
        language_name: impl Into<String>,
        use_case: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            language_name: language_name.into(),
            use_case: use_case.into(),
            reason: reason.into(),
        }
    }
}

impl Favourite for ProgrammingLanguage {
    type Patch = ProgrammingLanguagePatch;

    const COLLECTION: &'static str = "programmingLanguages";
    const NOUN: &'static str = "favourite programming language";
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

/// Partial update for [`ProgrammingLanguage`]. The inbound handler requires
/// the full field set, so in practice every field is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingLanguagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FavouritePatch for ProgrammingLanguagePatch {
    fn is_empty(&self) -> bool {
        self.language_name.is_none() && self.use_case.is_none() && self.reason.is_none()
    }
}
