//! # Error Handling Middleware
//!
//! Maps domain errors from `slotbook-core` to HTTP status codes and JSON
//! `{"error": message}` bodies, so every handler reports failures the same way.
//!
//! Client-caused failures (validation, conflict, unknown id) carry their
//! message through without the variant prefix. Storage failures are logged and
//! replaced by a generic message so that backend details never reach the caller.
//! Malformed bodies and path segments are reported as validation failures.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Message returned for storage and internal failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while processing the request";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::models::slot::Slot;
///
/// fn handler(start: i32, end: i32) -> Result<Json<Slot>, AppError> {
///     let slot = Slot::bookable(start, end)?;
///     Ok(Json(slot))
/// }
/// # fn main() { assert!(handler(1, 3).is_err()); }
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::BAD_REQUEST,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.0 {
            BookingError::NotFound(message) | BookingError::Validation(message) => message,
            conflict @ BookingError::Conflict(_) => conflict.to_string(),
            BookingError::Database(err) => {
                tracing::error!("Request failed: {:?}", err);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers returning `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Treats a bare `eyre::Report` as a storage failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(BookingError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(BookingError::Validation(rejection.body_text()))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
