//! Warehouse backends for the enriched customer table.
//!
//! The `customer` table is populated in full-replace mode: every load wipes
//! the previous contents and inserts the new record set. There is no upsert
//! and no incremental append.

pub mod repository;

#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "postgres-repo")]
pub mod postgres;

pub use repository::{CustomerWarehouse, RepositoryError, RepositoryResult};

#[cfg(feature = "local-repo")]
pub use local::LocalWarehouse;

#[cfg(feature = "postgres-repo")]
pub use postgres::{PostgresConfig, PostgresWarehouse};
