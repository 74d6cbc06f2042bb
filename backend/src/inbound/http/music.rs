//! Favourite music API handlers.
//!
//! ```text
//! GET    /api/music?userId=u1
//! POST   /api/music {"userId":"u1","musicName":"Song","singer":"Artist","reason":"x"}
//! PUT    /api/music/{id}?userId=u1
//! DELETE /api/music/{id}?userId=u1
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{normalise, FieldErrors, OwnerQuery};
use crate::domain::{Error, Music, MusicPatch};

/// Create request body. Every field is optional at the serde level so
/// missing ones surface as itemised validation errors, not a bare 400.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMusicRequest {
    pub user_id: Option<String>,
    pub music_name: Option<String>,
    pub singer: Option<String>,
    pub reason: Option<String>,
}

impl CreateMusicRequest {
    fn validate(self) -> Result<Music, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let music_name = errors.require("musicName", self.music_name);
        let singer = errors.require("singer", self.singer);
        let reason = normalise(self.reason).unwrap_or_default();

        match (user_id, music_name, singer) {
            (Some(user_id), Some(music_name), Some(singer)) if errors.is_empty() => {
                Ok(Music::new(user_id, music_name, singer, reason))
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Update request body; `musicName` and `singer` are required on update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMusicRequest {
    pub music_name: Option<String>,
    pub singer: Option<String>,
    pub reason: Option<String>,
}

impl UpdateMusicRequest {
    fn validate(self) -> Result<MusicPatch, Error> {
        let mut errors = FieldErrors::new();
        let music_name = errors.require("musicName", self.music_name);
        let singer = errors.require("singer", self.singer);
        errors.into_result()?;
        Ok(MusicPatch {
            music_name,
            singer,
            reason: normalise(self.reason),
        })
    }
}

/// Client-facing record shape with the id as a hex string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponse {
    pub id: String,
    pub user_id: String,
    pub music_name: String,
    pub singer: String,
    pub reason: String,
}

impl From<Music> for MusicResponse {
    fn from(record: Music) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            music_name: record.music_name,
            singer: record.singer,
            reason: record.reason,
        }
    }
}

/// Create a favourite music record.
#[post("/music")]
pub async fn create_music(
    state: web::Data<AppState>,
    payload: web::Json<CreateMusicRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.music.create(record).await?;
    let body = MusicResponse::from(stored);
    Ok(created(
        format!("/api/music/{}", body.id),
        "Favourite music created successfully",
        body,
    ))
}

/// List a user's favourite music.
#[get("/music")]
pub async fn list_music(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.music.list_by_owner(&owner).await?;
    let message = format!(
        "Found {} favourite music records for user {owner}",
        records.len()
    );
    let data: Vec<MusicResponse> = records.into_iter().map(MusicResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one favourite music record by id.
#[get("/music/{id}")]
pub async fn get_music(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .music
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("favourite music not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite music retrieved successfully",
        MusicResponse::from(record),
    )))
}

/// Update a favourite music record, owner-checked.
#[put("/music/{id}")]
pub async fn update_music(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateMusicRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state.music.update(&id, &owner, &patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite music updated successfully",
        MusicResponse::from(updated),
    )))
}

/// Delete a favourite music record, owner-checked.
#[delete("/music/{id}")]
pub async fn delete_music(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.music.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Favourite music deleted successfully",
        json!({ "deletedId": id }),
    )))
}

#[cfg(test)]
#[path = "music_tests.rs"]
mod tests;
