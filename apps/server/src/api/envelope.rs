//! Uniform `{data, message, statusCode}` result wrapper.
//!
//! Drop-list and review operations report every outcome — success and
//! expected failure alike — through this envelope instead of raising, so
//! the HTTP layer can map `status_code` straight onto the transport status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::Error;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: String,
    pub status_code: u16,
}

impl<T> Envelope<T> {
    pub fn new(data: Option<T>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            data,
            message: message.into(),
            status_code,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(Some(data), message, 200)
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(Some(data), message, 201)
    }

    pub fn rejected(message: impl Into<String>, status_code: u16) -> Self {
        Self::new(None, message, status_code)
    }

    /// Convert a failed operation into an envelope. Business-rule failures
    /// keep their message; store failures are logged under `context` and
    /// reported as the generic 500 message.
    pub fn from_error(context: &str, err: Error) -> Self {
        match err {
            Error::Validation(msg) | Error::Duplicate(msg) => Self::rejected(msg, 400),
            Error::NotFound(msg) => Self::rejected(msg, 404),
            Error::Unauthorized(msg) => Self::rejected(msg, 401),
            err => {
                tracing::error!(error = %err, "{context}");
                Self::rejected(context, 500)
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
