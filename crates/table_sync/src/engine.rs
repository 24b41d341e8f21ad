use std::{fmt, rc::Rc};

use platform_host::{DropdownOption, EntryPayload, HostServices, HostStrategy, RemoteCommandClient};

use crate::{
    commands, ColumnRoles, CommitReport, EditCommitter, LoadMode, LoadOutcome, SessionCache,
    TableLoader, TableSyncError,
};

#[derive(Clone)]
/// Loader, committer, and session cache wired over one [`HostServices`] bundle.
///
/// Loader and committer share the same column roles, so the column rendered editable is the
/// column committed as the value.
pub struct TableSyncEngine {
    loader: TableLoader,
    committer: EditCommitter,
    cache: SessionCache,
    commands: Rc<dyn RemoteCommandClient>,
    host_strategy: HostStrategy,
}

impl fmt::Debug for TableSyncEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSyncEngine")
            .field("loader", &self.loader)
            .field("committer", &self.committer)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

impl TableSyncEngine {
    /// Wires an engine with default column roles and the unscoped session slot.
    pub fn new(services: &HostServices) -> Self {
        Self::configured(services, ColumnRoles::default(), None)
    }

    /// Wires an engine with explicit column roles and an optional session cache scope.
    pub fn configured(
        services: &HostServices,
        roles: ColumnRoles,
        cache_scope: Option<&str>,
    ) -> Self {
        let cache = match cache_scope {
            Some(scope) => SessionCache::scoped(services.session.clone(), scope),
            None => SessionCache::new(services.session.clone()),
        };
        let loader = TableLoader::new(
            services.fetcher.clone(),
            services.view.clone(),
            cache.clone(),
        )
        .with_roles(roles);
        let committer =
            EditCommitter::new(services.commands.clone(), services.view.clone()).with_roles(roles);
        Self {
            loader,
            committer,
            cache,
            commands: services.commands.clone(),
            host_strategy: services.host_strategy,
        }
    }

    /// Host strategy the engine was wired for.
    pub const fn host_strategy(&self) -> HostStrategy {
        self.host_strategy
    }

    /// Session cache holding the most recently loaded content.
    pub fn session_cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Loads a read-only table. See [`TableLoader::load`].
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the resource is not a table.
    pub async fn load_read_only_table(
        &self,
        url: &str,
        table_id: &str,
        caption: &str,
    ) -> Result<LoadOutcome, TableSyncError> {
        self.loader.load_read_only_table(url, table_id, caption).await
    }

    /// Loads a table with an editable value column. See [`TableLoader::load`].
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the resource is not a table.
    pub async fn load_read_write_table(
        &self,
        url: &str,
        table_id: &str,
        caption: &str,
    ) -> Result<LoadOutcome, TableSyncError> {
        self.loader.load_read_write_table(url, table_id, caption).await
    }

    /// Re-renders the session-cached content. See [`TableLoader::restore`].
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the cached content is not a table.
    pub fn restore_table(
        &self,
        table_id: &str,
        caption: &str,
        mode: LoadMode,
    ) -> Result<LoadOutcome, TableSyncError> {
        self.loader.restore(table_id, caption, mode)
    }

    /// Commits every row of an editable table. See [`EditCommitter::commit`].
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::TableNotFound`] when no table has `table_id`.
    pub async fn save_table(&self, table_id: &str) -> Result<CommitReport, TableSyncError> {
        self.committer.commit(table_id).await
    }

    /// Stores file content in the session cache and sends it to the backend's `save_file`
    /// command under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::Session`] when caching fails or
    /// [`TableSyncError::CommandFailure`] when the backend rejects the file.
    pub async fn save_file(&self, name: &str, content: &str) -> Result<String, TableSyncError> {
        self.cache.put(content)?;
        commands::save_file(self.commands.as_ref(), &EntryPayload::new(name, content)).await
    }

    /// Lists the selectable backend options.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::CommandFailure`] when the command fails.
    pub async fn dropdown_options(&self) -> Result<Vec<DropdownOption>, TableSyncError> {
        commands::dropdown_options(self.commands.as_ref()).await
    }
}
