//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the table engine: DOM table
//! rendering, `fetch`, `sessionStorage`, and Tauri command transport.
//!
//! Transport bindings live under `bridge/`:
//! - `bridge::commands` (Tauri `invoke`)
//! - `bridge::resource` (`fetch`)
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod commands;
pub mod resource;
pub mod session;
pub mod view;

pub use adapters::{
    build_host_services, host_strategy_name, remote_command_client, resource_fetcher,
    selected_host_strategy, session_storage, table_view, RemoteCommandClientAdapter,
};
pub use commands::TauriCommandClient;
pub use resource::WebResourceFetcher;
pub use session::WebSessionStore;
pub use view::DomTableView;
