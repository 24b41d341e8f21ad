//! Tauri desktop host for the table sync engine.
//!
//! Registers the remote commands the webview client invokes (`updated_entry`, `save_file`,
//! `get_dropdown_options`) and owns the persistent entry store they write to.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[doc(hidden)]
pub mod entries;

/// Starts the Tauri desktop host process.
pub fn run() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            entries::updated_entry,
            entries::save_file,
            entries::get_dropdown_options
        ])
        .run(tauri::generate_context!())
        .expect("desktop_tauri failed to run Tauri application");
}
