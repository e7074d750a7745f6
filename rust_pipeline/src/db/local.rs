//! In-memory warehouse for testing and development.

use crate::core::domain::Transaction;
use crate::db::repository::{CustomerWarehouse, RepositoryResult};

/// Warehouse that keeps the loaded rows in memory.
#[derive(Debug, Default)]
pub struct LocalWarehouse {
    rows: Vec<Transaction>,
}

impl LocalWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently held by the warehouse.
    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }
}

impl CustomerWarehouse for LocalWarehouse {
    fn replace_all(&mut self, records: &[Transaction]) -> RepositoryResult<usize> {
        self.rows = records.to_vec();
        Ok(self.rows.len())
    }
}
