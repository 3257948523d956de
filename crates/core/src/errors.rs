use thiserror::Error;

use crate::models::slot::Slot;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Carries the rejected candidate slot.
    #[error("Appointment conflicts with an existing appointment")]
    Conflict(Slot),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
