//! Operation error taxonomy.
//!
//! Only conditions that abort an operation before any write are errors.
//! Empty sources and unresolved references are expected states of
//! iterative data entry: they surface through notifications and
//! operation reports, never through `Err`.

use thiserror::Error;

/// Failure modes that abort an operation with zero writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// A required source table is absent from the store.
    #[error("required table '{0}' was not found")]
    MissingTable(String),

    /// A table exists but lacks a column the operation cannot work without.
    #[error("table '{table}' has no '{column}' column")]
    MissingColumn { table: String, column: String },

    /// The operator declined the confirmation prompt.
    #[error("operation cancelled by the operator")]
    UserDeclined,
}

impl OperationError {
    /// Convenience constructor for [`OperationError::MissingTable`].
    pub fn missing_table(name: impl Into<String>) -> Self {
        OperationError::MissingTable(name.into())
    }

    /// Convenience constructor for [`OperationError::MissingColumn`].
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        OperationError::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Result alias for engine operations.
pub type OperationResult<T> = Result<T, OperationError>;
