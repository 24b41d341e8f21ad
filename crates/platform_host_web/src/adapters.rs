use std::rc::Rc;

use platform_host::{
    CommandFuture, HostServices, NoopRemoteCommandClient, RemoteCommandClient,
};
use serde_json::Value;

use crate::{DomTableView, TauriCommandClient, WebResourceFetcher, WebSessionStore};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "features `desktop-host-stub` and `desktop-host-tauri` are mutually exclusive; enable only one"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Plain browser page; remote commands have no backend.
    Browser,
    /// Tauri webview with the `invoke` command transport.
    DesktopTauri,
    /// Desktop placeholder wiring used while native transport is unavailable.
    DesktopStub,
}

impl From<HostStrategy> for platform_host::HostStrategy {
    fn from(strategy: HostStrategy) -> Self {
        match strategy {
            HostStrategy::Browser => Self::Browser,
            HostStrategy::DesktopTauri => Self::DesktopTauri,
            HostStrategy::DesktopStub => Self::DesktopStub,
        }
    }
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-tauri")]
    {
        HostStrategy::DesktopTauri
    }

    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(any(feature = "desktop-host-stub", feature = "desktop-host-tauri")))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    platform_host::HostStrategy::from(selected_host_strategy()).as_str()
}

/// Adapter enum that erases the concrete command transport behind [`RemoteCommandClient`].
#[derive(Debug, Clone, Copy)]
pub enum RemoteCommandClientAdapter {
    /// Browser page without a backend; every command fails.
    Browser(NoopRemoteCommandClient),
    /// Tauri `invoke` transport.
    DesktopTauri(TauriCommandClient),
    /// No-op fallback used when desktop transport is intentionally stubbed.
    DesktopStub(NoopRemoteCommandClient),
}

impl RemoteCommandClient for RemoteCommandClientAdapter {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> CommandFuture<'a, Result<Value, String>> {
        match self {
            Self::Browser(client) | Self::DesktopStub(client) => client.invoke(command, args),
            Self::DesktopTauri(client) => client.invoke(command, args),
        }
    }
}

/// Builds the remote command adapter for the compile-time selected host strategy.
pub fn remote_command_client() -> RemoteCommandClientAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => RemoteCommandClientAdapter::Browser(NoopRemoteCommandClient),
        HostStrategy::DesktopTauri => {
            RemoteCommandClientAdapter::DesktopTauri(TauriCommandClient)
        }
        HostStrategy::DesktopStub => {
            RemoteCommandClientAdapter::DesktopStub(NoopRemoteCommandClient)
        }
    }
}

/// Builds the resource fetcher. Every strategy loads tables through the webview's `fetch`.
pub fn resource_fetcher() -> WebResourceFetcher {
    WebResourceFetcher
}

/// Builds the session store. Every strategy uses the webview's `sessionStorage`.
pub fn session_storage() -> WebSessionStore {
    WebSessionStore
}

/// Builds the DOM table view.
pub fn table_view() -> DomTableView {
    DomTableView
}

/// Builds the full host bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        commands: Rc::new(remote_command_client()),
        fetcher: Rc::new(resource_fetcher()),
        session: Rc::new(session_storage()),
        view: Rc::new(table_view()),
        host_strategy: selected_host_strategy().into(),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn host_strategy_name_matches_selected_strategy() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::DesktopTauri => "desktop-tauri",
            HostStrategy::DesktopStub => "desktop-stub",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn command_adapter_variant_follows_strategy() {
        let adapter = remote_command_client();
        let matches = matches!(
            (selected_host_strategy(), adapter),
            (HostStrategy::Browser, RemoteCommandClientAdapter::Browser(_))
                | (HostStrategy::DesktopTauri, RemoteCommandClientAdapter::DesktopTauri(_))
                | (HostStrategy::DesktopStub, RemoteCommandClientAdapter::DesktopStub(_))
        );
        assert!(matches);
    }

    #[cfg(not(any(feature = "desktop-host-stub", feature = "desktop-host-tauri")))]
    #[test]
    fn browser_bundle_has_no_command_backend() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, platform_host::HostStrategy::Browser);
        assert!(!services.host_strategy.has_command_backend());

        let err = block_on(services.commands.invoke("updated_entry", json!({})))
            .expect_err("browser strategy has no backend");
        assert!(err.contains("updated_entry"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bundle_session_store_keeps_values_natively() {
        let services = build_host_services();
        services
            .session
            .set_item("adapters.probe", "1")
            .expect("session write");
        assert_eq!(
            services.session.get_item("adapters.probe"),
            Some("1".to_string())
        );
    }
}
