use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Appointments are soft deleted: deleted_at is set, rows are never removed
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id BIGSERIAL PRIMARY KEY,
            operator VARCHAR(50) NOT NULL,
            start_time INTEGER NOT NULL,
            end_time INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NULL,
            deleted_at TIMESTAMP WITH TIME ZONE NULL,
            CONSTRAINT valid_slot CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Active-set lookups filter on operator and skip cancelled rows
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_active_operator
            ON appointments(operator, start_time)
            WHERE deleted_at IS NULL;
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
