use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::debug;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::Span;

use super::category::SynonymRegistry;
use super::dataset::Dataset;
use super::error::{ApiError, ServiceError};
use super::middleware::request_logger;
use super::recommend::recommend;
use super::source::DataSource;
use super::store::SnapshotStore;
use crate::structs::request::RecommendRequest;
use crate::structs::response::{RecommendResponse, StatusResponse};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SynonymRegistry>,
    pub store: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(source: impl DataSource + 'static) -> Self {
        AppState {
            registry: Arc::new(SynonymRegistry::new()),
            store: Arc::new(SnapshotStore::new(source)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/reload", post(reload))
        .route("/recommend", post(recommend_products))
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(|request: &Request<Body>, _span: &Span| {
                    debug!("{} {}", request.method(), request.uri().path())
                }),
        )
}

enum LoadMode {
    Lazy,
    Reload,
}

// Loading reads the file synchronously, keep it off the async workers.
async fn load(store: Arc<SnapshotStore>, mode: LoadMode) -> Result<Arc<Dataset>, ServiceError> {
    let loaded = tokio::task::spawn_blocking(move || match mode {
        LoadMode::Lazy => store.ensure_loaded(),
        LoadMode::Reload => store.reload(),
    })
    .await?;

    Ok(loaded?)
}

async fn healthz(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let path = state.store.location();

    match load(state.store.clone(), LoadMode::Lazy).await {
        Ok(dataset) => Ok(Json(StatusResponse {
            status: "ok",
            rows: dataset.len(),
            path,
        })),
        Err(e) => Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e).with_path(path)),
    }
}

async fn reload(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let path = state.store.location();

    match load(state.store.clone(), LoadMode::Reload).await {
        Ok(dataset) => Ok(Json(StatusResponse {
            status: "ok",
            rows: dataset.len(),
            path,
        })),
        Err(e) => Err(ApiError::new(StatusCode::BAD_REQUEST, e).with_path(path)),
    }
}

async fn recommend_products(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request = RecommendRequest::from_body(&body);

    let dataset = match load(state.store.clone(), LoadMode::Lazy).await {
        Ok(dataset) => dataset,
        Err(ServiceError::Load(e)) => {
            return Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ServiceError::NotYetLoaded(e),
            ))
        }
        Err(e) => return Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e)),
    };

    let rows = recommend(&state.registry, &dataset, &request)
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    let response = RecommendResponse {
        status: "ok",
        count: rows.len(),
        items: rows.into_iter().map(|row| dataset.view(row)).collect(),
    };

    Ok(Json(response).into_response())
}
