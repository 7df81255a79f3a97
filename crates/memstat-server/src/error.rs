//! HTTP rendering of `MemstatError`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use memstat_core::MemstatError;

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Wraps a core error so it can be returned from axum handlers.
#[derive(Debug)]
pub struct HttpError(pub MemstatError);

impl From<MemstatError> for HttpError {
    fn from(e: MemstatError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [
                (header::CONTENT_TYPE, TEXT_PLAIN_UTF8),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            self.0.to_string(),
        )
            .into_response()
    }
}
