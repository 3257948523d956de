//! # Appointment Handlers
//!
//! Thin HTTP adapters over [`AppointmentService`](slotbook_core::service::AppointmentService).
//! Each handler extracts path and body, calls one lifecycle operation and
//! converts the result to its wire form. Extraction failures go through
//! [`AppError`] so they share the JSON error body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;
use slotbook_core::models::{
    appointment::{
        AppointmentId, AppointmentResponse, BookAppointmentRequest, RescheduleAppointmentRequest,
    },
    slot::Slot,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// `GET /appointments/:operator` — active appointments, possibly empty.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Path(operator): Path<String>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.service.list_active(&operator).await?;

    Ok(Json(
        appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
    ))
}

/// `GET /free_slots/:operator` — gaps of the day as `{start_time, end_time}`.
#[axum::debug_handler]
pub async fn free_slots(
    State(state): State<Arc<ApiState>>,
    Path(operator): Path<String>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = state.service.free_slots(&operator).await?;
    Ok(Json(slots))
}

/// `POST /appointment/book`
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<BookAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let Json(payload) = payload?;
    let appointment = state
        .service
        .book(&payload.operator, payload.start_time, payload.end_time)
        .await?;

    Ok(Json(appointment.into()))
}

/// `PUT /appointment/reschedule/:id`
#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<AppointmentId>, PathRejection>,
    payload: Result<Json<RescheduleAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let appointment = state
        .service
        .reschedule(id, payload.start_time, payload.end_time)
        .await?;

    Ok(Json(appointment.into()))
}

/// `DELETE /appointment/cancel/:id` — returns the record with `deleted_at` set.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<AppointmentId>, PathRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let Path(id) = id?;
    let appointment = state.service.cancel(id).await?;
    Ok(Json(appointment.into()))
}
