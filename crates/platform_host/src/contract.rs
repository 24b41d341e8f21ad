//! Command names and payload shapes shared by the webview client and the desktop backend.
//!
//! Field names here are the wire contract: the desktop command handlers deserialize exactly
//! these structs.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Persists one edited key/value pair. Returns the stored value.
pub const UPDATED_ENTRY_COMMAND: &str = "updated_entry";
/// Persists a file payload. Returns a confirmation message.
pub const SAVE_FILE_COMMAND: &str = "save_file";
/// Lists the selectable backend options.
pub const GET_DROPDOWN_OPTIONS_COMMAND: &str = "get_dropdown_options";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Key/value pair sent to `updated_entry` and `save_file`.
pub struct EntryPayload {
    /// Entry key.
    pub key: String,
    /// Entry value.
    pub value: String,
}

impl EntryPayload {
    /// Creates a payload from any string-like key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Wraps the payload in the named-argument bundle expected by the command handlers.
    pub fn command_args(&self) -> Value {
        json!({ "payload": self })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable option returned by `get_dropdown_options`.
pub struct DropdownOption {
    /// Submitted value.
    pub value: String,
    /// Display label.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn entry_payload_args_nest_under_payload_name() {
        let args = EntryPayload::new("k1", "v1").command_args();
        assert_eq!(args, json!({ "payload": { "key": "k1", "value": "v1" } }));
    }
}
