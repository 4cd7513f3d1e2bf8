//! REST handlers.

use crate::error::ApiError;
use crate::extract::Caller;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use warden_core::User;
use warden_directory::UserUpdate;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::InvalidRequest(
            "name, email and password are required".into(),
        ));
    }
    state
        .accounts
        .register(&req.name, &req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "registered" }))))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state.accounts.login(&req.email, &req.password).await?;
    Ok(Json(json!({ "token": token })))
}

pub async fn list_users(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.accounts.list_users().await?))
}

/// Fetch a single user record. Self-access only.
pub async fn get_user(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    warden_auth::authorize_self_access(&caller, &id)?;
    Ok(Json(state.accounts.get_user(&id).await?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = UserUpdate {
        name: req.name,
        email: req.email,
    };
    state.accounts.update_user(&id, &update).await?;
    Ok(Json(json!({ "message": "updated" })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.accounts.delete_user(&id).await?;
    Ok(Json(json!({ "message": "deleted" })))
}
