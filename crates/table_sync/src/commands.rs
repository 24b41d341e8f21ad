//! Typed wrappers over the backend's remote commands.

use platform_host::{
    invoke_command_with, DropdownOption, EntryPayload, RemoteCommandClient,
    GET_DROPDOWN_OPTIONS_COMMAND, SAVE_FILE_COMMAND, UPDATED_ENTRY_COMMAND,
};
use serde_json::json;

use crate::TableSyncError;

fn command_failure(command: &str) -> impl FnOnce(String) -> TableSyncError + '_ {
    move |message| TableSyncError::CommandFailure {
        command: command.to_string(),
        message,
    }
}

/// Persists one key/value pair and returns the value the backend stored.
///
/// # Errors
///
/// Returns [`TableSyncError::CommandFailure`] when the command fails.
pub async fn updated_entry<C: RemoteCommandClient + ?Sized>(
    client: &C,
    entry: &EntryPayload,
) -> Result<String, TableSyncError> {
    invoke_command_with(client, UPDATED_ENTRY_COMMAND, &entry.command_args())
        .await
        .map_err(command_failure(UPDATED_ENTRY_COMMAND))
}

/// Persists a file payload and returns the backend's confirmation message.
///
/// # Errors
///
/// Returns [`TableSyncError::CommandFailure`] when the command fails.
pub async fn save_file<C: RemoteCommandClient + ?Sized>(
    client: &C,
    file: &EntryPayload,
) -> Result<String, TableSyncError> {
    invoke_command_with(client, SAVE_FILE_COMMAND, &file.command_args())
        .await
        .map_err(command_failure(SAVE_FILE_COMMAND))
}

/// Lists the selectable backend options.
///
/// # Errors
///
/// Returns [`TableSyncError::CommandFailure`] when the command fails.
pub async fn dropdown_options<C: RemoteCommandClient + ?Sized>(
    client: &C,
) -> Result<Vec<DropdownOption>, TableSyncError> {
    invoke_command_with(client, GET_DROPDOWN_OPTIONS_COMMAND, &json!({}))
        .await
        .map_err(command_failure(GET_DROPDOWN_OPTIONS_COMMAND))
}
