use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slotbook_core::models::appointment::{Appointment, AppointmentStatus};
use slotbook_core::models::slot::Slot;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub operator: String,
    pub start_time: i32,
    pub end_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Self {
            id: row.id,
            operator: row.operator,
            slot: Slot::new(row.start_time, row.end_time),
            created_at: row.created_at,
            updated_at: row.updated_at,
            status: AppointmentStatus::from_deleted_at(row.deleted_at),
        }
    }
}
