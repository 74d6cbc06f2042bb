//! Favourite programming language API handlers.
//!
//! Updates require the full field set (the record is small enough that a
//! partial patch buys nothing), matching the create requirements.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{FieldErrors, OwnerQuery};
use crate::domain::{Error, ProgrammingLanguage, ProgrammingLanguagePatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgrammingLanguageRequest {
    pub user_id: Option<String>,
    pub language_name: Option<String>,
    pub use_case: Option<String>,
    pub reason: Option<String>,
}

impl CreateProgrammingLanguageRequest {
    fn validate(self) -> Result<ProgrammingLanguage, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let language_name = errors.require("languageName", self.language_name);
        let use_case = errors.require("useCase", self.use_case);
        let reason = errors.require("reason", self.reason);

        match (user_id, language_name, use_case, reason) {
            (Some(user_id), Some(language_name), Some(use_case), Some(reason))
                if errors.is_empty() =>
            {
                Ok(ProgrammingLanguage::new(
                    user_id,
                    language_name,
                    use_case,
                    reason,
                ))
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Update request body; all three fields are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgrammingLanguageRequest {
    pub language_name: Option<String>,
    pub use_case: Option<String>,
    pub reason: Option<String>,
}

impl UpdateProgrammingLanguageRequest {
    fn validate(self) -> Result<ProgrammingLanguagePatch, Error> {
        let mut errors = FieldErrors::new();
        let language_name = errors.require("languageName", self.language_name);
        let use_case = errors.require("useCase", self.use_case);
        let reason = errors.require("reason", self.reason);
        errors.into_result()?;
        Ok(ProgrammingLanguagePatch {
            language_name,
            use_case,
            reason,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammingLanguageResponse {
    pub id: String,
    pub user_id: String,
    pub language_name: String,
    pub use_case: String,
    pub reason: String,
}

impl From<ProgrammingLanguage> for ProgrammingLanguageResponse {
    fn from(record: ProgrammingLanguage) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            language_name: record.language_name,
            use_case: record.use_case,
            reason: record.reason,
        }
    }
}

/// Create a favourite programming language.
#[post("/programming-languages")]
pub async fn create_programming_language(
    state: web::Data<AppState>,
    payload: web::Json<CreateProgrammingLanguageRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.programming_languages.create(record).await?;
    let body = ProgrammingLanguageResponse::from(stored);
    Ok(created(
        format!("/api/programming-languages/{}", body.id),
        "Favourite programming language created successfully",
        body,
    ))
}

/// List a user's favourite programming languages.
#[get("/programming-languages")]
pub async fn list_programming_languages(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.programming_languages.list_by_owner(&owner).await?;
    let message = format!(
        "Found {} favourite programming languages for user {owner}",
        records.len()
    );
    let data: Vec<ProgrammingLanguageResponse> = records
        .into_iter()
        .map(ProgrammingLanguageResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one favourite programming language by id.
#[get("/programming-languages/{id}")]
pub async fn get_programming_language(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .programming_languages
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("favourite programming language not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite programming language retrieved successfully",
        ProgrammingLanguageResponse::from(record),
    )))
}

/// Update a favourite programming language, owner-checked.
#[put("/programming-languages/{id}")]
pub async fn update_programming_language(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateProgrammingLanguageRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state
        .programming_languages
        .update(&id, &owner, &patch)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite programming language updated successfully",
        ProgrammingLanguageResponse::from(updated),
    )))
}

/// Delete a favourite programming language, owner-checked.
#[delete("/programming-languages/{id}")]
pub async fn delete_programming_language(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.programming_languages.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite programming language deleted successfully",
        json!({ "deletedId": id }),
    )))
}

#[cfg(test)]
#[path = "programming_languages_tests.rs"]
mod tests;
