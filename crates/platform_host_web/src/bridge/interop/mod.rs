//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use platform_host::FetchedResource;
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn invoke_command(command: &str, args: &Value) -> Result<Value, String> {
    imp::invoke_command(command, args).await
}

pub async fn fetch_text(url: &str) -> Result<FetchedResource, String> {
    imp::fetch_text(url).await
}
