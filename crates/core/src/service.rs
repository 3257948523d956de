//! # Appointment Lifecycle
//!
//! [`AppointmentService`] is the only entry point that mutates appointments.
//! It validates input, serialises mutations per operator, runs the conflict
//! check against the current active set and then performs a single store write.
//!
//! Lifecycle: `Active` (book) -> `Active` (reschedule) -> `Cancelled`. There is
//! no transition out of `Cancelled`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::{BookingError, BookingResult};
use crate::locks::OperatorLocks;
use crate::models::appointment::{validate_operator, Appointment, AppointmentId, NewAppointment};
use crate::models::slot::Slot;
use crate::store::AppointmentStore;
use crate::timeline;

pub struct AppointmentService {
    store: Arc<dyn AppointmentStore>,
    locks: OperatorLocks,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self {
            store,
            locks: OperatorLocks::new(),
        }
    }

    /// Active appointments for `operator`, ordered by start time.
    pub async fn list_active(&self, operator: &str) -> BookingResult<Vec<Appointment>> {
        let appointments = self.store.active_for(operator).await?;
        debug!(
            "Listed {} active appointments for operator={}",
            appointments.len(),
            operator
        );
        Ok(appointments)
    }

    /// Gaps in `operator`'s day not covered by an active appointment.
    pub async fn free_slots(&self, operator: &str) -> BookingResult<Vec<Slot>> {
        let appointments = self.store.active_for(operator).await?;
        Ok(timeline::free_slots_for(&appointments))
    }

    pub async fn book(
        &self,
        operator: &str,
        start_time: i32,
        end_time: i32,
    ) -> BookingResult<Appointment> {
        let slot = Slot::bookable(start_time, end_time)?;
        validate_operator(operator)?;

        let _guard = self.locks.acquire(operator).await;

        let active = self.store.active_for(operator).await?;
        if let Some(existing) = timeline::find_conflict(slot, &active, None) {
            warn!(
                "Rejected booking {} for operator={}: overlaps appointment {}",
                slot, operator, existing.id
            );
            return Err(BookingError::Conflict(slot));
        }

        let appointment = self
            .store
            .insert(NewAppointment {
                operator: operator.to_string(),
                slot,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            "Booked appointment {} for operator={} at {}",
            appointment.id, operator, slot
        );
        Ok(appointment)
    }

    pub async fn reschedule(
        &self,
        id: AppointmentId,
        start_time: i32,
        end_time: i32,
    ) -> BookingResult<Appointment> {
        let appointment = self.active_by_id(id).await?;
        let slot = Slot::bookable(start_time, end_time)?;

        let _guard = self.locks.acquire(&appointment.operator).await;

        // It may have been cancelled while we waited for the lock.
        let appointment = self.active_by_id(id).await?;

        let active = self.store.active_for(&appointment.operator).await?;
        if let Some(existing) = timeline::find_conflict(slot, &active, Some(id)) {
            warn!(
                "Rejected reschedule of appointment {} to {}: overlaps appointment {}",
                id, slot, existing.id
            );
            return Err(BookingError::Conflict(slot));
        }

        let updated = self.store.update_slot(id, slot, Utc::now()).await?;

        info!(
            "Rescheduled appointment {} for operator={} from {} to {}",
            id, appointment.operator, appointment.slot, slot
        );
        Ok(updated)
    }

    /// Cancels an appointment. Cancelling twice returns the record unchanged,
    /// keeping the original cancellation time.
    pub async fn cancel(&self, id: AppointmentId) -> BookingResult<Appointment> {
        let appointment = self.find(id).await?;
        if !appointment.is_active() {
            debug!("Appointment {} already cancelled", id);
            return Ok(appointment);
        }

        let _guard = self.locks.acquire(&appointment.operator).await;

        let current = self.find(id).await?;
        if !current.is_active() {
            return Ok(current);
        }

        let cancelled = self.store.soft_delete(id, Utc::now()).await?;

        info!(
            "Cancelled appointment {} for operator={} at {}",
            id, cancelled.operator, cancelled.slot
        );
        Ok(cancelled)
    }

    async fn find(&self, id: AppointmentId) -> BookingResult<Appointment> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Cancelled appointments are invisible to reschedule.
    async fn active_by_id(&self, id: AppointmentId) -> BookingResult<Appointment> {
        let appointment = self.find(id).await?;
        if appointment.is_active() {
            Ok(appointment)
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: AppointmentId) -> BookingError {
    debug!("Appointment {} not found", id);
    BookingError::NotFound("Appointment not found".to_string())
}
