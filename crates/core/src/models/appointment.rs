use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::slot::Slot;

pub type AppointmentId = i64;

/// Longest operator identifier the store accepts.
pub const MAX_OPERATOR_LEN: usize = 50;

/// Where an appointment sits in its lifecycle. Cancelled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Active,
    Cancelled { at: DateTime<Utc> },
}

impl AppointmentStatus {
    /// Maps a nullable `deleted_at` column onto the lifecycle tag.
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(at) => AppointmentStatus::Cancelled { at },
            None => AppointmentStatus::Active,
        }
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            AppointmentStatus::Active => None,
            AppointmentStatus::Cancelled { at } => Some(*at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub operator: String,
    pub slot: Slot,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_active(&self) -> bool {
        matches!(self.status, AppointmentStatus::Active)
    }
}

/// Fields the caller supplies when booking; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub operator: String,
    pub slot: Slot,
    pub created_at: DateTime<Utc>,
}

/// Rejects blank or oversized operator identifiers.
pub fn validate_operator(operator: &str) -> BookingResult<()> {
    if operator.trim().is_empty() {
        return Err(BookingError::Validation(
            "Operator must not be empty.".to_string(),
        ));
    }

    if operator.chars().count() > MAX_OPERATOR_LEN {
        return Err(BookingError::Validation(format!(
            "Operator must be at most {} characters.",
            MAX_OPERATOR_LEN
        )));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub operator: String,
    pub start_time: i32,
    pub end_time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub start_time: i32,
    pub end_time: i32,
}

/// Wire form of an appointment. Unset timestamps serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: AppointmentId,
    pub operator: String,
    pub start_time: i32,
    pub end_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            deleted_at: appointment.status.deleted_at(),
            operator: appointment.operator,
            start_time: appointment.slot.start_time,
            end_time: appointment.slot.end_time,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}
