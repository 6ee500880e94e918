use axum::{
    Router,
    extract::Request,
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
    },
    middleware::{self, Next},
    response::Response,
    routing::{MethodRouter, get, post},
};

use std::sync::Arc;

use crate::{ServerError, income, item, plan};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Allow any origin, header and method on every matched route, and default
/// the content type to JSON.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    let any = HeaderValue::from_static("*");
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, any.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, any.clone());
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, any);
    headers
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    response
}

/// CORS preflight: empty 200, headers come from [`cors`].
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn id_required() -> ServerError {
    ServerError::MissingId
}

/// Also mounted on `HEAD`, which `get` would otherwise answer.
async fn method_not_supported() -> ServerError {
    ServerError::MethodNotSupported
}

/// `/plan` and `/plan/`, where writes have no id to target.
fn plan_collection() -> MethodRouter<ServerState> {
    get(plan::list)
        .head(method_not_supported)
        .post(plan::create)
        .put(id_required)
        .delete(id_required)
        .options(preflight)
        .fallback(method_not_supported)
}

pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/plan", plan_collection())
        .route("/plan/", plan_collection())
        .route(
            "/plan/{*id}",
            get(plan::list)
                .head(method_not_supported)
                .post(plan::create)
                .put(plan::replace)
                .delete(plan::delete)
                .options(preflight)
                .fallback(method_not_supported),
        )
        .route(
            "/item/",
            post(id_required)
                .options(preflight)
                .fallback(method_not_supported),
        )
        .route(
            "/item/{*id}",
            post(item::create)
                .options(preflight)
                .fallback(method_not_supported),
        )
        .route(
            "/income",
            get(income::get)
                .head(method_not_supported)
                .options(preflight)
                .fallback(method_not_supported),
        )
        .route_layer(middleware::from_fn(cors))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}
