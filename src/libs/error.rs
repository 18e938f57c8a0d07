use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::source::SourceError;
use crate::structs::response::ErrorResponse;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Load(#[from] SourceError),

    #[error("CSV has not been loaded yet: {0}")]
    NotYetLoaded(#[source] SourceError),

    #[error(transparent)]
    Matcher(#[from] regex::Error),

    #[error(transparent)]
    Task(#[from] tokio::task::JoinError),
}

impl ServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Load(e) => e.kind(),
            ServiceError::NotYetLoaded(_) => "not_yet_loaded",
            ServiceError::Matcher(_) | ServiceError::Task(_) => "internal",
        }
    }
}

/// A `ServiceError` on its way out of a handler.
pub struct ApiError {
    pub status: StatusCode,
    pub error: ServiceError,
    pub path: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<ServiceError>) -> Self {
        ApiError {
            status,
            error: error.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: String) -> Self {
        self.path = Some(path);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            status: "error",
            kind: self.error.kind(),
            detail: self.error.to_string(),
            path: self.path,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn kinds_are_distinct() {
        let not_found = ServiceError::from(SourceError::NotFound(PathBuf::from("x.csv")));
        let unreadable = ServiceError::from(SourceError::Unreadable {
            path: PathBuf::from("x.csv"),
            tried: vec!["utf-8: bad".to_string()],
        });
        let schema = ServiceError::from(SourceError::SchemaInvalid("no Category".to_string()));
        let pending = ServiceError::NotYetLoaded(SourceError::NotFound(PathBuf::from("x.csv")));

        let kinds = [not_found.kind(), unreadable.kind(), schema.kind(), pending.kind()];
        assert_eq!(kinds, ["load_not_found", "load_unreadable", "load_bad_schema", "not_yet_loaded"]);
    }

    #[test]
    fn detail_carries_the_cause() {
        let pending = ServiceError::NotYetLoaded(SourceError::NotFound(PathBuf::from("data/products.csv")));
        assert_eq!(pending.to_string(), "CSV has not been loaded yet: CSV not found: data/products.csv");
    }
}
