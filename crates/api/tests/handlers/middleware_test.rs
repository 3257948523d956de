use axum::{body::to_bytes, http::StatusCode, response::Response};
use serde_json::Value;
use slotbook_api::middleware::error_handling::{map_error, AppError, INTERNAL_ERROR_MESSAGE};
use slotbook_core::{errors::BookingError, models::slot::Slot};

async fn error_message(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("Body should be JSON");
    body["error"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let response = map_error(BookingError::NotFound("Appointment not found".to_string()));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Appointment not found");
}

#[tokio::test]
async fn test_error_handling_validation() {
    let response = map_error(BookingError::Validation(
        "Appointments must be exactly 1 hour long.".to_string(),
    ));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Appointments must be exactly 1 hour long."
    );
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let response = map_error(BookingError::Conflict(Slot::new(10, 11)));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Appointment conflicts with an existing appointment"
    );
}

#[tokio::test]
async fn test_error_handling_database_hides_details() {
    let response = map_error(BookingError::Database(eyre::eyre!("password authentication failed")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(response).await, INTERNAL_ERROR_MESSAGE);
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    let err = AppError::from(eyre::eyre!("timeout"));

    assert!(matches!(err.0, BookingError::Database(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
