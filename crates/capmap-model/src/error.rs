//! Entity store errors

use crate::store::Table;

/// Errors raised when building an [`EntityStore`](crate::EntityStore) from typed records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Id repeats within one table
    #[error("duplicate id {id} in {table}")]
    DuplicateId {
        /// Offending table
        table: Table,
        /// Repeated id
        id: String,
    },
}
