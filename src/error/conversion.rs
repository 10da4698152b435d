/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing handlers
 * to return `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * Error responses are a status code plus a short plain-text body
 * (e.g. `401 Invalid JWT Token`). No structured error codes and no
 * backend detail are exposed.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed with internal error");
        }

        (status, message).into_response()
    }
}
