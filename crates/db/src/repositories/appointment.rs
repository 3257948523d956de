use crate::models::DbAppointment;
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    operator: &str,
    start_time: i32,
    end_time: i32,
    created_at: DateTime<Utc>,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: operator={}, start_time={}, end_time={}",
        operator, start_time, end_time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (operator, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, operator, start_time, end_time, created_at, updated_at, deleted_at
        "#,
    )
    .bind(operator)
    .bind(start_time)
    .bind(end_time)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Appointment created successfully: id={}", appointment.id);
    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, operator, start_time, end_time, created_at, updated_at, deleted_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_active_appointments_by_operator(
    pool: &Pool<Postgres>,
    operator: &str,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, operator, start_time, end_time, created_at, updated_at, deleted_at
        FROM appointments
        WHERE operator = $1 AND deleted_at IS NULL
        ORDER BY start_time ASC, end_time ASC
        "#,
    )
    .bind(operator)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn update_appointment_slot(
    pool: &Pool<Postgres>,
    id: i64,
    start_time: i32,
    end_time: i32,
    updated_at: DateTime<Utc>,
) -> Result<DbAppointment> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET start_time = $2, end_time = $3, updated_at = $4
        WHERE id = $1 AND deleted_at IS NULL
        RETURNING id, operator, start_time, end_time, created_at, updated_at, deleted_at
        "#,
    )
    .bind(id)
    .bind(start_time)
    .bind(end_time)
    .bind(updated_at)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Active appointment {} not found", id))?;

    Ok(appointment)
}

pub async fn soft_delete_appointment(
    pool: &Pool<Postgres>,
    id: i64,
    deleted_at: DateTime<Utc>,
) -> Result<DbAppointment> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        UPDATE appointments
        SET deleted_at = $2
        WHERE id = $1
        RETURNING id, operator, start_time, end_time, created_at, updated_at, deleted_at
        "#,
    )
    .bind(id)
    .bind(deleted_at)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Appointment {} not found", id))?;

    Ok(appointment)
}
