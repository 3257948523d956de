use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use slotbook_core::models::appointment::{Appointment, AppointmentId, NewAppointment};
use slotbook_core::models::slot::Slot;
use slotbook_core::store::AppointmentStore;

// Mock store for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn active_for(&self, operator: &str) -> eyre::Result<Vec<Appointment>>;

        async fn get(&self, id: AppointmentId) -> eyre::Result<Option<Appointment>>;

        async fn insert(&self, appointment: NewAppointment) -> eyre::Result<Appointment>;

        async fn update_slot(
            &self,
            id: AppointmentId,
            slot: Slot,
            updated_at: DateTime<Utc>,
        ) -> eyre::Result<Appointment>;

        async fn soft_delete(
            &self,
            id: AppointmentId,
            deleted_at: DateTime<Utc>,
        ) -> eyre::Result<Appointment>;
    }
}
