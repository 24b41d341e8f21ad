//! Browser capability bridge used by the `platform_host_web` service adapters.
//!
//! This module is organized by host domain (`commands`, `resource`) while preserving a stable
//! API for the adapters in this crate.

mod commands;
mod interop;
mod resource;

use platform_host::FetchedResource;
use serde_json::Value;

pub async fn invoke_command(command: &str, args: &Value) -> Result<Value, String> {
    commands::invoke_command(command, args).await
}

pub async fn fetch_text(url: &str) -> Result<FetchedResource, String> {
    resource::fetch_text(url).await
}
