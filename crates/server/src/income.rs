//! Income API endpoint

use api_types::budget::Section;
use axum::{Json, extract::State};

use crate::{ServerError, budget::map_section, server::ServerState};

/// Handle requests for the section currently titled "Income"
pub async fn get(State(state): State<ServerState>) -> Result<Json<Section>, ServerError> {
    tracing::debug!("reading income section");
    let income = state.engine.income().await?;
    Ok(Json(map_section(income)))
}
