use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::EngineError;
use serde::de::DeserializeOwned;

pub use server::{ServerState, router, run_with_listener};

mod budget;
mod income;
mod item;
mod plan;
mod server;

pub mod types {
    pub mod budget {
        pub use api_types::budget::{Item, Section};
    }
}

/// Errors a handler can answer with. Bodies are plain text.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// The path carries no section id.
    MissingId,
    /// The id segment is not a number, so it cannot match any section.
    InvalidId(String),
    /// The request body is not valid JSON for the expected shape.
    MalformedBody(String),
    MethodNotSupported,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::SectionNotFound(_) | EngineError::IncomeMissing => StatusCode::NOT_FOUND,
        EngineError::IncomeProtected(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::MissingId => (
                StatusCode::BAD_REQUEST,
                "Section ID is required".to_string(),
            ),
            ServerError::InvalidId(raw) => {
                tracing::debug!("non-numeric section id {raw:?}");
                (
                    StatusCode::NOT_FOUND,
                    EngineError::SectionNotFound(0).to_string(),
                )
            }
            ServerError::MalformedBody(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::MethodNotSupported => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not supported".to_string(),
            ),
        };

        tracing::warn!("request rejected with {status}: {message}");
        (status, message).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// Parse the `{id}` path segment.
fn section_id(raw: &str) -> Result<i64, ServerError> {
    if raw.is_empty() {
        return Err(ServerError::MissingId);
    }
    raw.parse()
        .map_err(|_| ServerError::InvalidId(raw.to_string()))
}

/// Decode a JSON body regardless of the request's content type.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ServerError> {
    serde_json::from_slice(body).map_err(|err| ServerError::MalformedBody(err.to_string()))
}
