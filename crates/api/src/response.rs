//! Shared response envelope for API handlers.
//!
//! Success and error bodies share one shape:
//! `{ "statusCode": 200, "status": "success", "message": "..." }`.

use axum::http::StatusCode;
use serde::Serialize;

/// `status` value for 2xx responses.
pub const STATUS_SUCCESS: &str = "success";
/// `status` value for every error response.
pub const STATUS_ERROR: &str = "error";

/// Standard status/message response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status_code: u16,
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            status: STATUS_SUCCESS,
            message: message.into(),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}
