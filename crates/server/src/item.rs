//! Item API endpoints, mounted under `/item`.

use api_types::budget::{Item, Section};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    ServerError,
    budget::{item_input, map_sections},
    decode,
    server::ServerState,
    section_id,
};

/// Append the body as a new item of section `{id}`.
pub async fn create(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Vec<Section>>), ServerError> {
    let id = section_id(&raw_id)?;
    if !state.engine.section_exists(id).await {
        return Err(engine::EngineError::SectionNotFound(id).into());
    }
    let payload: Item = decode(&body)?;
    tracing::debug!("adding item \"{}\" to section {id}", payload.item_name);

    let sections = state.engine.create_item(id, item_input(payload)).await?;
    Ok((StatusCode::CREATED, Json(map_sections(sections))))
}
