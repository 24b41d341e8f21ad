//! Shared host-bundle models for browser and desktop composition.

use std::rc::Rc;

use crate::{
    MemoryRemoteCommandClient, MemoryResourceFetcher, MemorySessionStore, MemoryTableView,
    RemoteCommandClient, ResourceFetcher, SessionStore, TableView,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition without a command backend.
    Browser,
    /// Tauri-hosted desktop composition.
    DesktopTauri,
    /// Desktop composition with placeholder adapters.
    DesktopStub,
    /// Fully in-memory composition for tests and headless use.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::DesktopTauri => "desktop-tauri",
            Self::DesktopStub => "desktop-stub",
            Self::Memory => "memory",
        }
    }

    /// Returns whether remote commands reach a real backend under this strategy.
    pub const fn has_command_backend(self) -> bool {
        matches!(self, Self::DesktopTauri)
    }
}

/// Runtime-selected host service bundle injected into the table engine.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `table_sync`, which keeps the engine decoupled from browser and desktop adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Backend command transport.
    pub commands: Rc<dyn RemoteCommandClient>,
    /// Resource fetch transport.
    pub fetcher: Rc<dyn ResourceFetcher>,
    /// Session-scoped key/value storage.
    pub session: Rc<dyn SessionStore>,
    /// Table rendering surface.
    pub view: Rc<dyn TableView>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle and returns the concrete adapters alongside it so tests can
    /// seed and inspect them.
    pub fn memory() -> (Self, MemoryHostHandles) {
        let handles = MemoryHostHandles::default();
        let services = handles.services();
        (services, handles)
    }
}

#[derive(Debug, Clone, Default)]
/// Concrete adapters behind a [`HostServices::memory`] bundle. Clones share state.
pub struct MemoryHostHandles {
    /// Recording command client.
    pub commands: MemoryRemoteCommandClient,
    /// Canned-response fetcher.
    pub fetcher: MemoryResourceFetcher,
    /// Session store.
    pub session: MemorySessionStore,
    /// Table view.
    pub view: MemoryTableView,
}

impl MemoryHostHandles {
    /// Replaces the command client, keeping the other handles.
    ///
    /// Bundles built earlier keep the previous client.
    pub fn with_commands(mut self, commands: MemoryRemoteCommandClient) -> Self {
        self.commands = commands;
        self
    }

    /// Builds a bundle over these handles.
    pub fn services(&self) -> HostServices {
        HostServices {
            commands: Rc::new(self.commands.clone()),
            fetcher: Rc::new(self.fetcher.clone()),
            session: Rc::new(self.session.clone()),
            view: Rc::new(self.view.clone()),
            host_strategy: HostStrategy::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::Browser.as_str(), "browser");
        assert_eq!(HostStrategy::DesktopTauri.as_str(), "desktop-tauri");
        assert_eq!(HostStrategy::DesktopStub.as_str(), "desktop-stub");
        assert_eq!(HostStrategy::Memory.as_str(), "memory");
        assert!(HostStrategy::DesktopTauri.has_command_backend());
        assert!(!HostStrategy::Browser.has_command_backend());
    }

    #[test]
    fn memory_bundle_shares_state_with_handles() {
        let (services, handles) = HostServices::memory();
        services.session.set_item("k", "v").expect("set");
        handles.view.mount("grid");

        assert_eq!(handles.session.get_item("k").as_deref(), Some("v"));
        assert!(services.view.read_rows("grid").expect("rows").is_empty());
        assert_eq!(services.host_strategy, HostStrategy::Memory);
    }
}
