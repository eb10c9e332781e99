//! HTTP error type with `IntoResponse`.
//!
//! Every error leaves the server as `{"detail": "..."}`. Store failures are
//! logged and answered with a generic 500 body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use todo_core::{ErrorDetail, UnpersistedToDo};

use crate::repository::DbError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Point lookup found no row (404).
    #[error("Todo Not Found!")]
    TodoNotFound,

    /// No route for the path (404).
    #[error("Not Found")]
    RouteNotFound,

    /// Malformed body, query or path parameter (422).
    #[error("{0}")]
    Validation(String),

    /// Store failure (500, logged).
    #[error(transparent)]
    Database(#[from] DbError),

    /// A response was built from an entity the store never saw (500, logged).
    #[error(transparent)]
    Unpersisted(#[from] UnpersistedToDo),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TodoNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Unpersisted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
