//! Mobile app API handlers.
//!
//! The `platform` field is matched case-insensitively against
//! [`MOBILE_PLATFORMS`] and stored in its canonical spelling.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{normalise, FieldErrors, OwnerQuery};
use crate::domain::{
    canonical_mobile_platform, Error, FavouritePatch, MobileApp, MobileAppPatch, MOBILE_PLATFORMS,
};

fn checked_platform(errors: &mut FieldErrors, value: Option<String>) -> Option<String> {
    let value = value?;
    match canonical_mobile_platform(&value) {
        Some(canonical) => Some(canonical.to_owned()),
        None => {
            errors.push(format!(
                "platform must be one of: {}",
                MOBILE_PLATFORMS.join(", ")
            ));
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMobileAppRequest {
    pub user_id: Option<String>,
    pub app_name: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    pub reason: Option<String>,
}

impl CreateMobileAppRequest {
    fn validate(self) -> Result<MobileApp, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let app_name = errors.require("appName", self.app_name);
        let platform = errors.require("platform", self.platform);
        let platform = checked_platform(&mut errors, platform);
        let category = errors.require("category", self.category);
        let reason = errors.require("reason", self.reason);

        match (user_id, app_name, platform, category, reason) {
            (Some(user_id), Some(app_name), Some(platform), Some(category), Some(reason))
                if errors.is_empty() =>
            {
                Ok(MobileApp::new(user_id, app_name, platform, category, reason))
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Partial update; blank fields are treated as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMobileAppRequest {
    pub app_name: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    pub reason: Option<String>,
}

impl UpdateMobileAppRequest {
    fn validate(self) -> Result<MobileAppPatch, Error> {
        let mut errors = FieldErrors::new();
        let patch = MobileAppPatch {
            app_name: normalise(self.app_name),
            platform: checked_platform(&mut errors, normalise(self.platform)),
            category: normalise(self.category),
            reason: normalise(self.reason),
        };

        if patch.is_empty() && errors.is_empty() {
            errors.push("at least one updatable field must be provided");
        }

        errors.into_result()?;
        Ok(patch)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppResponse {
    pub id: String,
    pub user_id: String,
    pub app_name: String,
    pub platform: String,
    pub category: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MobileApp> for MobileAppResponse {
    fn from(record: MobileApp) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            app_name: record.app_name,
            platform: record.platform,
            category: record.category,
            reason: record.reason,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create a mobile app entry.
#[post("/mobile-apps")]
pub async fn create_mobile_app(
    state: web::Data<AppState>,
    payload: web::Json<CreateMobileAppRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.mobile_apps.create(record).await?;
    let body = MobileAppResponse::from(stored);
    Ok(created(
        format!("/api/mobile-apps/{}", body.id),
        "Mobile app created successfully",
        body,
    ))
}

/// List a user's mobile apps.
#[get("/mobile-apps")]
pub async fn list_mobile_apps(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.mobile_apps.list_by_owner(&owner).await?;
    let message = if records.is_empty() {
        "No mobile apps found for this user".to_owned()
    } else {
        "Mobile apps retrieved successfully".to_owned()
    };
    let data: Vec<MobileAppResponse> = records.into_iter().map(MobileAppResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one mobile app by id.
#[get("/mobile-apps/{id}")]
pub async fn get_mobile_app(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .mobile_apps
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("mobile app not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Mobile app retrieved successfully",
        MobileAppResponse::from(record),
    )))
}

/// Update a mobile app, owner-checked.
#[put("/mobile-apps/{id}")]
pub async fn update_mobile_app(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateMobileAppRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state.mobile_apps.update(&id, &owner, &patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Mobile app updated successfully",
        MobileAppResponse::from(updated),
    )))
}

/// Delete a mobile app, owner-checked.
#[delete("/mobile-apps/{id}")]
pub async fn delete_mobile_app(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.mobile_apps.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Mobile app deleted successfully",
        json!({ "deletedId": id, "deletedAt": Utc::now() }),
    )))
}

#[cfg(test)]
#[path = "mobile_apps_tests.rs"]
mod tests;
