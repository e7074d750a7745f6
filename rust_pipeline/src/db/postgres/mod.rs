//! Postgres warehouse implementation using Diesel.
//!
//! Loads the enriched record set into the `customer` table in full-replace
//! mode: a delete and the batched inserts run inside a single transaction, so
//! a failed load leaves the previous contents in place.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{FileBasedMigrations, MigrationHarness};

use crate::core::domain::Transaction;
use crate::db::repository::{CustomerWarehouse, RepositoryError, RepositoryResult};

mod models;
mod schema;

use models::NewCustomerRow;
use schema::customer;

/// Rows per INSERT statement during the bulk load.
const INSERT_BATCH: usize = 1000;

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

impl PostgresConfig {
    pub fn from_env() -> RepositoryResult<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| {
                RepositoryError::ConfigurationError(
                    "DATABASE_URL or PG_DATABASE_URL must be set".to_string(),
                )
            })?;

        Ok(Self { database_url })
    }
}

/// Diesel-backed warehouse for Postgres.
pub struct PostgresWarehouse {
    conn: PgConnection,
}

impl PostgresWarehouse {
    /// Connect and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let mut conn = PgConnection::establish(&config.database_url)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        Self::run_migrations(&mut conn)?;

        Ok(Self { conn })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let migrations =
            FileBasedMigrations::from_path(format!("{}/migrations", env!("CARGO_MANIFEST_DIR")))
                .map_err(|e| {
                    RepositoryError::InternalError(format!("Migrations not found: {e}"))
                })?;

        conn.run_pending_migrations(migrations)
            .map_err(|e| RepositoryError::InternalError(format!("Migration error: {e}")))?;
        Ok(())
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::QueryError(err.to_string())
}

impl CustomerWarehouse for PostgresWarehouse {
    fn replace_all(&mut self, records: &[Transaction]) -> RepositoryResult<usize> {
        let rows: Vec<NewCustomerRow> = records.iter().map(NewCustomerRow::from).collect();

        let inserted = self
            .conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                diesel::delete(customer::table).execute(conn)?;

                let mut inserted = 0;
                for chunk in rows.chunks(INSERT_BATCH) {
                    inserted += diesel::insert_into(customer::table)
                        .values(chunk)
                        .execute(conn)?;
                }
                Ok(inserted)
            })
            .map_err(map_diesel_error)?;

        log::info!("Loaded {} rows into the customer table", inserted);
        Ok(inserted)
    }
}
