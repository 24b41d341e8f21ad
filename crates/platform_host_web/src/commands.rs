//! Remote command adapters for desktop-webview contexts.

use platform_host::{CommandFuture, RemoteCommandClient};
use serde_json::Value;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Command client backed by the Tauri `invoke` bridge.
///
/// Outside a Tauri webview (or when not compiled for wasm32) every invocation fails.
pub struct TauriCommandClient;

impl RemoteCommandClient for TauriCommandClient {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> CommandFuture<'a, Result<Value, String>> {
        Box::pin(async move { bridge::invoke_command(command, &args).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_tauri_client_matches_bridge_fallback_behavior() {
        let client: &dyn RemoteCommandClient = &TauriCommandClient;
        let err = block_on(client.invoke("updated_entry", json!({})))
            .expect_err("no invoke bridge outside wasm");
        assert_eq!(
            err,
            "Browser transport APIs are only available when compiled for wasm32"
        );
    }

    #[test]
    fn empty_command_names_are_rejected_before_transport() {
        let err = block_on(TauriCommandClient.invoke("", json!({}))).expect_err("empty name");
        assert_eq!(err, "command name must not be empty");
    }
}
