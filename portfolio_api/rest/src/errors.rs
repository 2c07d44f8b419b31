use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::ApiError;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

/// Like [`error`], but with additional fields next to `detail`.
pub fn error_with<T: Serialize>(code: StatusCode, detail: &'static str, extra: T) -> Response {
    #[derive(Serialize)]
    struct Body<T> {
        detail: &'static str,
        #[serde(flatten)]
        extra: T,
    }

    (code, Json(Body { detail, extra })).into_response()
}
