//! User API handlers.
//!
//! Signup, lookup, and deletion. There is no update route. Responses carry
//! [`UserResponse`], which has no password field, so neither the raw nor
//! the hashed password can appear in any payload.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::envelope::{created, ApiResponse};
use super::error::ApiResult;
use super::state::AppState;
use super::validation::FieldErrors;
use crate::domain::{Error, NewUser, User};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    fn validate(self) -> Result<NewUser, Error> {
        let mut errors = FieldErrors::new();
        let name = errors.require("name", self.name);
        let email = errors.require("email", self.email);
        let password = errors.require("password", self.password);

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(NewUser {
                name,
                email,
                password,
            }),
            _ => Err(errors.into_error()),
        }
    }
}

/// Client-facing user shape, deliberately without a password field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Sign up a new user. Duplicate emails answer 409.
#[post("/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = payload.into_inner().validate()?;
    let user = state.users.signup(new_user).await?;
    let body = UserResponse::from(user);
    Ok(created(
        format!("/api/users/{}", body.id),
        "User created successfully",
        body,
    ))
}

/// List every user.
#[get("/users")]
pub async fn list_users(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let users = state.users.list().await?;
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Users retrieved successfully", data)))
}

/// Fetch one user by id.
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .get(&id)
        .await?
        .ok_or_else(|| Error::not_found("user not found"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "User retrieved successfully",
        UserResponse::from(user),
    )))
}

/// Delete one user by id. The user's favourites are left in place.
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok("User deleted successfully", ())))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
