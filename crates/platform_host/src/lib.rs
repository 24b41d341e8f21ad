//! Typed host-domain contracts and shared models used by the table engine and its adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the remote command,
//! resource fetch, session storage, and table view contracts, together with in-memory adapters
//! used by tests and headless composition. Concrete browser adapters live in
//! `platform_host_web` and the command backend lives in `desktop_tauri`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod command;
pub mod contract;
pub mod host;
pub mod resource;
pub mod session;
pub mod view;

pub use command::{
    invoke_command_with, CommandFuture, MemoryRemoteCommandClient, NoopRemoteCommandClient,
    RecordedCommand, RemoteCommandClient,
};
pub use contract::{
    DropdownOption, EntryPayload, GET_DROPDOWN_OPTIONS_COMMAND, SAVE_FILE_COMMAND,
    UPDATED_ENTRY_COMMAND,
};
pub use host::{HostServices, HostStrategy, MemoryHostHandles};
pub use resource::{FetchedResource, MemoryResourceFetcher, ResourceFetcher, ResourceFuture};
pub use session::{session_store, MemorySessionStore, SessionStore, FILE_CONTENT_SLOT};
pub use view::{ColumnIndex, MemoryTableView, RenderedCell, RenderedTable, TableView, ViewError};
