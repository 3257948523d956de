use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::{ApiConfig, StorageConfig};
use slotbook_core::store::{memory::InMemoryStore, AppointmentStore};
use slotbook_db::{create_pool, schema::initialize_database, PgAppointmentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Build the appointment store
    let store: Arc<dyn AppointmentStore> = match &config.storage {
        StorageConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let db_pool = create_pool(database_url, *max_connections).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgAppointmentStore::new(db_pool))
        }
        StorageConfig::Memory => Arc::new(InMemoryStore::new()),
    };

    // Start API server
    slotbook_api::start_server(config, store).await?;

    Ok(())
}
