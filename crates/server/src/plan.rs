//! Section API endpoints, mounted under `/plan`.

use api_types::budget::Section;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    budget::{map_sections, section_input},
    decode,
    server::ServerState,
    section_id,
};

/// List every section. An id in the path is ignored.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Section>> {
    tracing::debug!("listing sections");
    Json(map_sections(state.engine.sections().await))
}

/// Append a new section; the id in the body is replaced by a fresh one.
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Section>>), ServerError> {
    let payload: Section = decode(&body)?;
    tracing::debug!("creating section \"{}\"", payload.title);

    let sections = state.engine.create_section(section_input(payload)).await;
    Ok((StatusCode::CREATED, Json(map_sections(sections))))
}

/// Replace the whole section at `{id}` with the body.
pub async fn replace(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Vec<Section>>, ServerError> {
    let id = section_id(&raw_id)?;
    if !state.engine.section_exists(id).await {
        return Err(engine::EngineError::SectionNotFound(id).into());
    }
    let payload: Section = decode(&body)?;
    tracing::debug!("replacing section {id}");

    let sections = state
        .engine
        .replace_section(id, section_input(payload))
        .await?;
    Ok(Json(map_sections(sections)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Section>>, ServerError> {
    let id = section_id(&raw_id)?;
    tracing::debug!("deleting section {id}");

    let sections = state.engine.delete_section(id).await?;
    Ok(Json(map_sections(sections)))
}
