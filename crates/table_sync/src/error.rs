use platform_host::{ColumnIndex, ViewError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures of table loading, restoring, and committing.
///
/// Loader failures other than [`TableSyncError::MalformedResponse`] are recovered: they are
/// logged and reported inside [`crate::LoadOutcome::Aborted`]. Per-row commit failures are
/// recorded in [`crate::RowStatus::Failed`] and never stop the remaining rows.
pub enum TableSyncError {
    /// No table exists with the requested id.
    #[error("cannot find the table with an id of `{table_id}`")]
    TableNotFound {
        /// Requested table id.
        table_id: String,
    },
    /// The table lacks a header or body section.
    #[error("cannot find the table with an id of `{table_id}` that has a header and body")]
    SectionsMissing {
        /// Requested table id.
        table_id: String,
    },
    /// The rendering surface refused an operation.
    #[error("table `{table_id}` rejected the update: {message}")]
    ViewRejected {
        /// Requested table id.
        table_id: String,
        /// Host error text.
        message: String,
    },
    /// The fetch produced no response.
    #[error("fetching `{url}` failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error text.
        message: String,
    },
    /// The fetch returned a non-success status.
    #[error("HTTP error: {status}")]
    HttpStatus {
        /// Response status code.
        status: u16,
    },
    /// The resource body is not a `{headers, rows}` table.
    #[error("malformed table resource: {0}")]
    MalformedResponse(String),
    /// Restore was requested but the session cache holds no content.
    #[error("no table content cached for this session")]
    NothingCached,
    /// A rendered row is too short to hold the key or value column.
    #[error("row has {cells} cells, no {column}")]
    MissingCell {
        /// Column that could not be resolved.
        column: ColumnIndex,
        /// Number of cells in the row.
        cells: usize,
    },
    /// A remote command returned an error.
    #[error("remote command `{command}` failed: {message}")]
    CommandFailure {
        /// Command name.
        command: String,
        /// Error text returned by the backend.
        message: String,
    },
    /// The session store rejected a write.
    #[error("session storage failed: {0}")]
    Session(String),
}

impl From<ViewError> for TableSyncError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::TableNotFound { table_id } => Self::TableNotFound { table_id },
            ViewError::SectionsMissing { table_id } => Self::SectionsMissing { table_id },
            ViewError::Rejected { table_id, message } => Self::ViewRejected { table_id, message },
        }
    }
}
