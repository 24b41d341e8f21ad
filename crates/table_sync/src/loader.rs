//! Fetching table resources and rendering them into a table view.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use leptos::logging;
use platform_host::{ColumnIndex, ResourceFetcher, TableView};
use serde::{Deserialize, Serialize};

use crate::{ColumnRoles, SessionCache, TableDescriptor, TableSyncError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whether a rendered table accepts in-place edits.
pub enum LoadMode {
    /// Every cell is read-only.
    #[default]
    ReadOnly,
    /// The value column of every row is editable.
    Editable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a load or restore that did not fail with a malformed resource.
pub enum LoadOutcome {
    /// The table now shows the loaded content.
    Rendered {
        /// Number of header cells rendered.
        headers: usize,
        /// Number of body rows rendered.
        rows: usize,
    },
    /// The load stopped early and was logged. The table keeps whatever it showed before.
    Aborted(TableSyncError),
    /// A newer load on the same table started before this one's response arrived.
    Superseded,
}

impl LoadOutcome {
    /// Returns whether the table was rendered.
    pub const fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

#[derive(Debug, Clone, Default)]
/// Per-table monotonically increasing request tokens.
///
/// Each load takes a fresh token before it suspends; on resume only the holder of the latest
/// token for that table may render.
pub struct RequestTokens {
    inner: Rc<RefCell<HashMap<String, u64>>>,
}

impl RequestTokens {
    /// Issues the next token for `table_id`.
    pub fn issue(&self, table_id: &str) -> u64 {
        let mut tokens = self.inner.borrow_mut();
        let token = tokens.entry(table_id.to_string()).or_insert(0);
        *token += 1;
        *token
    }

    /// Returns whether `token` is still the latest one issued for `table_id`.
    pub fn is_current(&self, table_id: &str, token: u64) -> bool {
        self.inner.borrow().get(table_id).copied() == Some(token)
    }
}

#[derive(Clone)]
/// Loads JSON table resources into a [`TableView`].
pub struct TableLoader {
    fetcher: Rc<dyn ResourceFetcher>,
    view: Rc<dyn TableView>,
    cache: SessionCache,
    roles: ColumnRoles,
    tokens: RequestTokens,
}

impl fmt::Debug for TableLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableLoader")
            .field("cache", &self.cache)
            .field("roles", &self.roles)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl TableLoader {
    /// Creates a loader rendering into `view` and remembering loaded content in `cache`.
    pub fn new(
        fetcher: Rc<dyn ResourceFetcher>,
        view: Rc<dyn TableView>,
        cache: SessionCache,
    ) -> Self {
        Self {
            fetcher,
            view,
            cache,
            roles: ColumnRoles::default(),
            tokens: RequestTokens::default(),
        }
    }

    /// Uses `roles` to pick the editable column.
    pub fn with_roles(mut self, roles: ColumnRoles) -> Self {
        self.roles = roles;
        self
    }

    /// Loads a table whose cells are all read-only.
    ///
    /// # Errors
    ///
    /// See [`TableLoader::load`].
    pub async fn load_read_only_table(
        &self,
        url: &str,
        table_id: &str,
        caption: &str,
    ) -> Result<LoadOutcome, TableSyncError> {
        self.load(url, table_id, caption, LoadMode::ReadOnly).await
    }

    /// Loads a table whose value column is editable.
    ///
    /// # Errors
    ///
    /// See [`TableLoader::load`].
    pub async fn load_read_write_table(
        &self,
        url: &str,
        table_id: &str,
        caption: &str,
    ) -> Result<LoadOutcome, TableSyncError> {
        self.load(url, table_id, caption, LoadMode::Editable).await
    }

    /// Fetches `url` and renders it into the table `table_id` under `caption`.
    ///
    /// Missing tables, transport failures, non-success statuses, and missing table sections
    /// are logged and returned as [`LoadOutcome::Aborted`]; the table body is only replaced
    /// after all of them pass. On success the raw body is written to the session cache.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the response body is not a table
    /// resource.
    pub async fn load(
        &self,
        url: &str,
        table_id: &str,
        caption: &str,
        mode: LoadMode,
    ) -> Result<LoadOutcome, TableSyncError> {
        if let Err(err) = self.view.set_caption(table_id, caption) {
            return Ok(abort(err.into()));
        }

        let token = self.tokens.issue(table_id);
        let fetched = self.fetcher.fetch_text(url).await;
        if !self.tokens.is_current(table_id, token) {
            logging::log!("discarding stale response from `{url}` for table `{table_id}`");
            return Ok(LoadOutcome::Superseded);
        }

        let resource = match fetched {
            Ok(resource) => resource,
            Err(message) => {
                return Ok(abort(TableSyncError::Transport {
                    url: url.to_string(),
                    message,
                }))
            }
        };
        if !resource.is_success() {
            return Ok(abort(TableSyncError::HttpStatus {
                status: resource.status,
            }));
        }

        let outcome = self.render_text(table_id, &resource.body, mode)?;
        if outcome.is_rendered() {
            if let Err(err) = self.cache.put(&resource.body) {
                logging::warn!("caching table `{table_id}` content failed: {err}");
            }
        }
        Ok(outcome)
    }

    /// Renders the session-cached content into `table_id` without fetching.
    ///
    /// Restoring counts as a newer load, so responses of loads still in flight for the same
    /// table are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the cached content is not a table
    /// resource.
    pub fn restore(
        &self,
        table_id: &str,
        caption: &str,
        mode: LoadMode,
    ) -> Result<LoadOutcome, TableSyncError> {
        if let Err(err) = self.view.set_caption(table_id, caption) {
            return Ok(abort(err.into()));
        }
        self.tokens.issue(table_id);
        let Some(raw) = self.cache.get() else {
            return Ok(abort(TableSyncError::NothingCached));
        };
        self.render_text(table_id, &raw, mode)
    }

    fn render_text(
        &self,
        table_id: &str,
        raw: &str,
        mode: LoadMode,
    ) -> Result<LoadOutcome, TableSyncError> {
        let table = TableDescriptor::from_json(raw).inspect_err(|err| {
            logging::error!("table `{table_id}`: {err}");
        })?;

        let ragged = table.ragged_rows();
        if !ragged.is_empty() {
            logging::warn!(
                "table `{table_id}`: rows {ragged:?} do not match the {} headers",
                table.headers.len()
            );
        }

        let value_columns = self.roles.editable_columns();
        let editable: &[ColumnIndex] = match mode {
            LoadMode::ReadOnly => &[],
            LoadMode::Editable => &value_columns,
        };
        if let Err(err) = self
            .view
            .render(table_id, &table.headers, &table.rows, editable)
        {
            return Ok(abort(err.into()));
        }

        Ok(LoadOutcome::Rendered {
            headers: table.headers.len(),
            rows: table.rows.len(),
        })
    }
}

fn abort(err: TableSyncError) -> LoadOutcome {
    logging::error!("{err}");
    LoadOutcome::Aborted(err)
}
