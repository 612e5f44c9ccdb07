use axum::{extract::State, Json};
use serde_json::Value;

use crate::models::{documents_to_json, InsertResponse, NewUser};
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = state.db.get().await?.list_users().await?;
    Ok(Json(documents_to_json(users)))
}

#[tracing::instrument(skip(state, user))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<NewUser>,
) -> Result<Json<InsertResponse>, AppError> {
    let user = user.into_document()?;
    let result = state.db.get().await?.insert_user(user).await?;
    tracing::info!("User created");
    Ok(Json(result.into()))
}
