//! Game API handlers.
//!
//! The `platform` field is checked against the fixed whitelist in
//! [`GAME_PLATFORMS`] on create and, when present, on update.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{normalise, FieldErrors, OwnerQuery};
use crate::domain::{Error, FavouritePatch, Game, GamePatch, GAME_PLATFORMS};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub user_id: Option<String>,
    pub game_name: Option<String>,
    pub platform: Option<String>,
    pub reason: Option<String>,
    pub is_digital: Option<bool>,
}

impl CreateGameRequest {
    fn validate(self) -> Result<Game, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let game_name = errors.require("gameName", self.game_name);
        let platform = errors.require("platform", self.platform);
        let reason = errors.require("reason", self.reason);
        let is_digital = errors.require_bool("isDigital", self.is_digital);

        if let Some(platform) = platform.as_deref() {
            errors.one_of("platform", platform, &GAME_PLATFORMS);
        }

        match (user_id, game_name, platform, reason, is_digital) {
            (Some(user_id), Some(game_name), Some(platform), Some(reason), Some(is_digital))
                if errors.is_empty() =>
            {
                Ok(Game::new(user_id, game_name, platform, reason, is_digital))
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Partial update; blank fields are treated as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub game_name: Option<String>,
    pub platform: Option<String>,
    pub reason: Option<String>,
    pub is_digital: Option<bool>,
}

impl UpdateGameRequest {
    fn validate(self) -> Result<GamePatch, Error> {
        let mut errors = FieldErrors::new();
        let patch = GamePatch {
            game_name: normalise(self.game_name),
            platform: normalise(self.platform),
            reason: normalise(self.reason),
            is_digital: self.is_digital,
        };

        if let Some(platform) = patch.platform.as_deref() {
            errors.one_of("platform", platform, &GAME_PLATFORMS);
        }
        if patch.is_empty() {
            errors.push("at least one updatable field must be provided");
        }

        errors.into_result()?;
        Ok(patch)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub user_id: String,
    pub game_name: String,
    pub platform: String,
    pub reason: String,
    pub is_digital: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Game> for GameResponse {
    fn from(record: Game) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            game_name: record.game_name,
            platform: record.platform,
            reason: record.reason,
            is_digital: record.is_digital,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create a game.
#[post("/games")]
pub async fn create_game(
    state: web::Data<AppState>,
    payload: web::Json<CreateGameRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.games.create(record).await?;
    let body = GameResponse::from(stored);
    Ok(created(
        format!("/api/games/{}", body.id),
        "Game created successfully",
        body,
    ))
}

/// List a user's games.
#[get("/games")]
pub async fn list_games(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.games.list_by_owner(&owner).await?;
    let message = if records.is_empty() {
        "No games found for this user".to_owned()
    } else {
        "Games retrieved successfully".to_owned()
    };
    let data: Vec<GameResponse> = records.into_iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one game by id.
#[get("/games/{id}")]
pub async fn get_game(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .games
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("game not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Game retrieved successfully",
        GameResponse::from(record),
    )))
}

/// Update a game, owner-checked.
#[put("/games/{id}")]
pub async fn update_game(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateGameRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state.games.update(&id, &owner, &patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Game updated successfully",
        GameResponse::from(updated),
    )))
}

/// Delete a game, owner-checked.
#[delete("/games/{id}")]
pub async fn delete_game(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.games.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Game deleted successfully",
        json!({ "deletedId": id }),
    )))
}

#[cfg(test)]
#[path = "games_tests.rs"]
mod tests;
