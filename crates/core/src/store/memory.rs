use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use tokio::sync::RwLock;

use super::AppointmentStore;
use crate::models::appointment::{Appointment, AppointmentId, AppointmentStatus, NewAppointment};
use crate::models::slot::Slot;

#[derive(Debug, Default)]
struct Rows {
    last_id: AppointmentId,
    appointments: BTreeMap<AppointmentId, Appointment>,
}

/// Process-local appointment store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<Rows>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn active_for(&self, operator: &str) -> Result<Vec<Appointment>> {
        let rows = self.rows.read().await;
        let mut active: Vec<Appointment> = rows
            .appointments
            .values()
            .filter(|a| a.operator == operator && a.is_active())
            .cloned()
            .collect();
        active.sort_by_key(|a| a.slot);
        Ok(active)
    }

    async fn get(&self, id: AppointmentId) -> Result<Option<Appointment>> {
        Ok(self.rows.read().await.appointments.get(&id).cloned())
    }

    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let stored = Appointment {
            id: rows.last_id,
            operator: appointment.operator,
            slot: appointment.slot,
            created_at: appointment.created_at,
            updated_at: None,
            status: AppointmentStatus::Active,
        };
        rows.appointments.insert(stored.id, stored.clone());

        tracing::debug!("Inserted appointment in memory: id={}", stored.id);
        Ok(stored)
    }

    async fn update_slot(
        &self,
        id: AppointmentId,
        slot: Slot,
        updated_at: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut rows = self.rows.write().await;
        let appointment = rows
            .appointments
            .get_mut(&id)
            .filter(|a| a.is_active())
            .ok_or_else(|| eyre!("Active appointment {} not found", id))?;

        appointment.slot = slot;
        appointment.updated_at = Some(updated_at);
        Ok(appointment.clone())
    }

    async fn soft_delete(
        &self,
        id: AppointmentId,
        deleted_at: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut rows = self.rows.write().await;
        let appointment = rows
            .appointments
            .get_mut(&id)
            .ok_or_else(|| eyre!("Appointment {} not found", id))?;

        appointment.status = AppointmentStatus::Cancelled { at: deleted_at };
        Ok(appointment.clone())
    }
}
