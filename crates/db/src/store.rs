use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use slotbook_core::models::appointment::{Appointment, AppointmentId, NewAppointment};
use slotbook_core::models::slot::Slot;
use slotbook_core::store::AppointmentStore;

use crate::repositories::appointment as repo;
use crate::DbPool;

/// [`AppointmentStore`] backed by the `appointments` table.
#[derive(Debug, Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn active_for(&self, operator: &str) -> Result<Vec<Appointment>> {
        let rows = repo::get_active_appointments_by_operator(&self.pool, operator).await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn get(&self, id: AppointmentId) -> Result<Option<Appointment>> {
        let row = repo::get_appointment_by_id(&self.pool, id).await?;
        Ok(row.map(Appointment::from))
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let row = repo::create_appointment(
            &self.pool,
            &appointment.operator,
            appointment.slot.start_time,
            appointment.slot.end_time,
            appointment.created_at,
        )
        .await?;
        Ok(row.into())
    }

    async fn update_slot(
        &self,
        id: AppointmentId,
        slot: Slot,
        updated_at: DateTime<Utc>,
    ) -> Result<Appointment> {
        let row = repo::update_appointment_slot(
            &self.pool,
            id,
            slot.start_time,
            slot.end_time,
            updated_at,
        )
        .await?;
        Ok(row.into())
    }

    async fn soft_delete(
        &self,
        id: AppointmentId,
        deleted_at: DateTime<Utc>,
    ) -> Result<Appointment> {
        let row = repo::soft_delete_appointment(&self.pool, id, deleted_at).await?;
        Ok(row.into())
    }
}
