//! YouTube channel API handlers.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{normalise, FieldErrors, OwnerQuery};
use crate::domain::{Error, FavouritePatch, YouTubeChannel, YouTubeChannelPatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateYouTubeChannelRequest {
    pub user_id: Option<String>,
    pub channel_name: Option<String>,
    pub creator_name: Option<String>,
    pub genre: Option<String>,
    pub reason: Option<String>,
}

impl CreateYouTubeChannelRequest {
    fn validate(self) -> Result<YouTubeChannel, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let channel_name = errors.require("channelName", self.channel_name);
        let creator_name = errors.require("creatorName", self.creator_name);
        let genre = errors.require("genre", self.genre);
        let reason = normalise(self.reason).unwrap_or_default();

        match (user_id, channel_name, creator_name, genre) {
            (Some(user_id), Some(channel_name), Some(creator_name), Some(genre))
                if errors.is_empty() =>
            {
                Ok(YouTubeChannel::new(
                    user_id,
                    channel_name,
                    creator_name,
                    genre,
                    reason,
                ))
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Partial update; blank fields are treated as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYouTubeChannelRequest {
    pub channel_name: Option<String>,
    pub creator_name: Option<String>,
    pub genre: Option<String>,
    pub reason: Option<String>,
}

impl UpdateYouTubeChannelRequest {
    fn validate(self) -> Result<YouTubeChannelPatch, Error> {
        let mut errors = FieldErrors::new();
        let patch = YouTubeChannelPatch {
            channel_name: normalise(self.channel_name),
            creator_name: normalise(self.creator_name),
            genre: normalise(self.genre),
            reason: normalise(self.reason),
        };

        if patch.is_empty() {
            errors.push("at least one updatable field must be provided");
        }

        errors.into_result()?;
        Ok(patch)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeChannelResponse {
    pub id: String,
    pub user_id: String,
    pub channel_name: String,
    pub creator_name: String,
    pub genre: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<YouTubeChannel> for YouTubeChannelResponse {
    fn from(record: YouTubeChannel) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            channel_name: record.channel_name,
            creator_name: record.creator_name,
            genre: record.genre,
            reason: record.reason,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create a YouTube channel entry.
#[post("/youtube-channels")]
pub async fn create_youtube_channel(
    state: web::Data<AppState>,
    payload: web::Json<CreateYouTubeChannelRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.youtube_channels.create(record).await?;
    let body = YouTubeChannelResponse::from(stored);
    Ok(created(
        format!("/api/youtube-channels/{}", body.id),
        "YouTube channel created successfully",
        body,
    ))
}

/// List a user's YouTube channels.
#[get("/youtube-channels")]
pub async fn list_youtube_channels(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.youtube_channels.list_by_owner(&owner).await?;
    let message = format!("Found {} YouTube channels for user {owner}", records.len());
    let data: Vec<YouTubeChannelResponse> = records
        .into_iter()
        .map(YouTubeChannelResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one YouTube channel by id.
#[get("/youtube-channels/{id}")]
pub async fn get_youtube_channel(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .youtube_channels
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("YouTube channel not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "YouTube channel retrieved successfully",
        YouTubeChannelResponse::from(record),
    )))
}

/// Update a YouTube channel, owner-checked.
#[put("/youtube-channels/{id}")]
pub async fn update_youtube_channel(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateYouTubeChannelRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state.youtube_channels.update(&id, &owner, &patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "YouTube channel updated successfully",
        YouTubeChannelResponse::from(updated),
    )))
}

/// Delete a YouTube channel, owner-checked.
#[delete("/youtube-channels/{id}")]
pub async fn delete_youtube_channel(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.youtube_channels.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "YouTube channel deleted successfully",
        json!({ "deletedId": id }),
    )))
}

#[cfg(test)]
#[path = "youtube_channels_tests.rs"]
mod tests;
