//! Storage seam for appointments.
//!
//! The lifecycle manager only talks to [`AppointmentStore`]; the Postgres
//! implementation lives in `slotbook-db` and [`memory::InMemoryStore`] backs
//! tests and database-less runs.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use crate::models::appointment::{Appointment, AppointmentId, NewAppointment};
use crate::models::slot::Slot;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Active appointments for `operator`, ordered by start time.
    async fn active_for(&self, operator: &str) -> Result<Vec<Appointment>>;

    /// Looks up an appointment by id whether or not it has been cancelled.
    async fn get(&self, id: AppointmentId) -> Result<Option<Appointment>>;

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment>;

    /// Moves an active appointment to `slot` and stamps `updated_at`.
    async fn update_slot(
        &self,
        id: AppointmentId,
        slot: Slot,
        updated_at: DateTime<Utc>,
    ) -> Result<Appointment>;

    /// Marks an appointment cancelled. The row is kept.
    async fn soft_delete(
        &self,
        id: AppointmentId,
        deleted_at: DateTime<Utc>,
    ) -> Result<Appointment>;
}
