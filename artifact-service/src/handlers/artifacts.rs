use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::extract::ArtifactId;
use crate::models::{
    document_to_json, documents_to_json, json_to_document, ArtifactUpdate, DeleteResponse,
    EmailQuery, InsertResponse, LikeUpdate, UpdateResponse,
};
use crate::startup::AppState;
use service_core::error::AppError;

pub const ARTIFACT_NOT_FOUND: &str = "Artifacts not found!";

#[tracing::instrument(skip(state))]
pub async fn list_artifacts(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let artifacts = state.db.get().await?.list_artifacts().await?;
    Ok(Json(documents_to_json(artifacts)))
}

#[tracing::instrument(skip(state))]
pub async fn most_liked_artifacts(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let artifacts = state.db.get().await?.most_liked_artifacts().await?;
    Ok(Json(documents_to_json(artifacts)))
}

#[tracing::instrument(skip(state))]
pub async fn artifacts_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Value>, AppError> {
    let artifacts = state.db.get().await?.find_artifacts(query.into_filter()).await?;
    Ok(Json(documents_to_json(artifacts)))
}

#[tracing::instrument(skip(state))]
pub async fn get_artifact(
    State(state): State<AppState>,
    ArtifactId(id): ArtifactId,
) -> Result<Json<Value>, AppError> {
    match state.db.get().await?.find_artifact(id).await? {
        Some(artifact) => Ok(Json(document_to_json(artifact))),
        None => Err(AppError::NotFound(anyhow::anyhow!(ARTIFACT_NOT_FOUND))),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn create_artifact(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<InsertResponse>, AppError> {
    let artifact = json_to_document(body)?;
    let result = state.db.get().await?.insert_artifact(artifact).await?;
    tracing::info!("Artifact created");
    Ok(Json(result.into()))
}

#[tracing::instrument(skip(state, like))]
pub async fn like_artifact(
    State(state): State<AppState>,
    ArtifactId(id): ArtifactId,
    Json(like): Json<LikeUpdate>,
) -> Result<Json<UpdateResponse>, AppError> {
    let result = state
        .db
        .get()
        .await?
        .set_artifact_fields(id, like.into_set_document()?)
        .await?;
    Ok(Json(result.into()))
}

#[tracing::instrument(skip(state, update))]
pub async fn update_artifact(
    State(state): State<AppState>,
    ArtifactId(id): ArtifactId,
    Json(update): Json<ArtifactUpdate>,
) -> Result<Json<UpdateResponse>, AppError> {
    let result = state
        .db
        .get()
        .await?
        .set_artifact_fields(id, update.into_set_document()?)
        .await?;
    if result.matched_count == 0 {
        tracing::debug!(artifact_id = %id, "Update matched no artifact");
    }
    Ok(Json(result.into()))
}

#[tracing::instrument(skip(state))]
pub async fn delete_artifact(
    State(state): State<AppState>,
    ArtifactId(id): ArtifactId,
) -> Result<Json<DeleteResponse>, AppError> {
    let result = state.db.get().await?.delete_artifact(id).await?;
    Ok(Json(result.into()))
}
