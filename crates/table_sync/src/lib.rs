//! Table load/render/sync engine.
//!
//! [`TableLoader`] fetches a JSON table resource and renders it into a
//! [`platform_host::TableView`], optionally with one editable column. [`EditCommitter`] reads
//! the rendered rows back and persists each row's key/value pair through the
//! `updated_entry` remote command, one row at a time. [`SessionCache`] keeps the most recently
//! loaded raw content so a table can be restored without re-fetching.
//!
//! [`TableSyncEngine`] bundles all three over a [`platform_host::HostServices`] bundle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;
mod committer;
mod engine;
mod error;
mod loader;
mod model;
mod roles;
mod session_cache;

pub use committer::{CommitReport, EditCommitter, RowOutcome, RowStatus};
pub use engine::TableSyncEngine;
pub use error::TableSyncError;
pub use loader::{LoadMode, LoadOutcome, RequestTokens, TableLoader};
pub use model::{stringify_cell, Row, TableDescriptor};
pub use roles::ColumnRoles;
pub use session_cache::SessionCache;
