//! Favourite vehicle API handlers.
//!
//! Vehicles carry the bounded `launchYear` field and length-limited text
//! fields, so create and update both run the numeric checks.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::{normalise, FieldErrors, OwnerQuery};
use crate::domain::{
    Error, FavouritePatch, Vehicle, VehiclePatch, LAUNCH_YEAR_MAX, LAUNCH_YEAR_MIN,
    VEHICLE_NAME_MAX, VEHICLE_REASON_MAX,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub user_id: Option<String>,
    pub vehicle_name: Option<String>,
    pub type_of_vehicle: Option<String>,
    pub launch_year: Option<i32>,
    pub reason: Option<String>,
}

impl CreateVehicleRequest {
    fn validate(self) -> Result<Vehicle, Error> {
        let mut errors = FieldErrors::new();
        let user_id = errors.require("userId", self.user_id);
        let vehicle_name = errors.require("vehicleName", self.vehicle_name);
        let type_of_vehicle = errors.require("typeOfVehicle", self.type_of_vehicle);
        let launch_year = errors.require_int("launchYear", self.launch_year);
        let reason = normalise(self.reason);

        if let Some(name) = vehicle_name.as_deref() {
            errors.max_len("vehicleName", name, VEHICLE_NAME_MAX);
        }
        if let Some(year) = launch_year {
            errors.in_range("launchYear", year, LAUNCH_YEAR_MIN, LAUNCH_YEAR_MAX);
        }
        if let Some(reason) = reason.as_deref() {
            errors.max_len("reason", reason, VEHICLE_REASON_MAX);
        }

        match (user_id, vehicle_name, type_of_vehicle, launch_year) {
            (Some(user_id), Some(vehicle_name), Some(type_of_vehicle), Some(launch_year))
                if errors.is_empty() =>
            {
                Ok(Vehicle::new(
                    user_id,
                    vehicle_name,
                    type_of_vehicle,
                    launch_year,
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
pub struct UpdateVehicleRequest {
    pub vehicle_name: Option<String>,
    pub type_of_vehicle: Option<String>,
    pub launch_year: Option<i32>,
    pub reason: Option<String>,
}

impl UpdateVehicleRequest {
    fn validate(self) -> Result<VehiclePatch, Error> {
        let mut errors = FieldErrors::new();
        let patch = VehiclePatch {
            vehicle_name: normalise(self.vehicle_name),
            type_of_vehicle: normalise(self.type_of_vehicle),
            launch_year: self.launch_year,
            reason: normalise(self.reason),
        };

        if let Some(name) = patch.vehicle_name.as_deref() {
            errors.max_len("vehicleName", name, VEHICLE_NAME_MAX);
        }
        if let Some(year) = patch.launch_year {
            errors.in_range("launchYear", year, LAUNCH_YEAR_MIN, LAUNCH_YEAR_MAX);
        }
        if let Some(reason) = patch.reason.as_deref() {
            errors.max_len("reason", reason, VEHICLE_REASON_MAX);
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
pub struct VehicleResponse {
    pub id: String,
    pub user_id: String,
    pub vehicle_name: String,
    pub type_of_vehicle: String,
    pub launch_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(record: Vehicle) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: record.user_id,
            vehicle_name: record.vehicle_name,
            type_of_vehicle: record.type_of_vehicle,
            launch_year: record.launch_year,
            reason: record.reason,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Create a favourite vehicle.
#[post("/vehicles")]
pub async fn create_vehicle(
    state: web::Data<AppState>,
    payload: web::Json<CreateVehicleRequest>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner().validate()?;
    let stored = state.vehicles.create(record).await?;
    let body = VehicleResponse::from(stored);
    Ok(created(
        format!("/api/vehicles/{}", body.id),
        "Vehicle created successfully",
        body,
    ))
}

/// List a user's favourite vehicles.
#[get("/vehicles")]
pub async fn list_vehicles(
    state: web::Data<AppState>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let owner = query.into_inner().require_user_id()?;
    let records = state.vehicles.list_by_owner(&owner).await?;
    let message = if records.is_empty() {
        "No vehicles found for this user".to_owned()
    } else {
        "Vehicles retrieved successfully".to_owned()
    };
    let data: Vec<VehicleResponse> = records.into_iter().map(VehicleResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// Fetch one vehicle by id.
#[get("/vehicles/{id}")]
pub async fn get_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let record = state
        .vehicles
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("vehicle not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Vehicle retrieved successfully",
        VehicleResponse::from(record),
    )))
}

/// Update a vehicle, owner-checked.
#[put("/vehicles/{id}")]
pub async fn update_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
    payload: web::Json<UpdateVehicleRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    let patch = payload.into_inner().validate()?;
    let updated = state.vehicles.update(&id, &owner, &patch).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Vehicle updated successfully",
        VehicleResponse::from(updated),
    )))
}

/// Delete a vehicle, owner-checked.
#[delete("/vehicles/{id}")]
pub async fn delete_vehicle(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<OwnerQuery>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let owner = query.into_inner().require_user_id()?;
    state.vehicles.delete(&id, &owner).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Vehicle deleted successfully",
        json!({ "deletedId": id }),
    )))
}

#[cfg(test)]
#[path = "vehicles_tests.rs"]
mod tests;
