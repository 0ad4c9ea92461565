//! API handlers for the user service

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::ServiceError;
use crate::models::{CreateUserRequest, CreateUserResponse, TransferQuery, TransferResponse, User};
use crate::user_service::UserService;

/// Register a new user
pub async fn create_user(
    State(user_service): State<Arc<UserService>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ServiceError> {
    let Json(request) = payload?;
    let response = user_service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List every registered user
pub async fn list_users(State(user_service): State<Arc<UserService>>) -> Json<Vec<User>> {
    Json(user_service.list_users().await)
}

/// Transfer balance between two users
pub async fn transfer(
    State(user_service): State<Arc<UserService>>,
    query: Result<Query<TransferQuery>, QueryRejection>,
) -> Result<Json<TransferResponse>, ServiceError> {
    let Query(query) = query?;
    let response = user_service
        .transfer(query.from_user_id, query.to_user_id, query.amount)
        .await?;
    Ok(Json(response))
}

pub async fn health_check() -> &'static str {
    "OK"
}
