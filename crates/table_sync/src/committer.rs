//! Committing edited table rows back to the backend.

use std::{fmt, rc::Rc};

use leptos::logging;
use platform_host::{EntryPayload, RemoteCommandClient, TableView};

use crate::{commands, ColumnRoles, TableSyncError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What happened to one row during a commit.
pub enum RowStatus {
    /// The backend stored the entry and acknowledged it with this value.
    Committed {
        /// Value returned by `updated_entry`.
        acknowledged: String,
    },
    /// The row was skipped or its command failed.
    Failed(TableSyncError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-row commit result.
pub struct RowOutcome {
    /// Zero-based body row index.
    pub row: usize,
    /// Entry bound from the row, when the row had both key and value cells.
    pub entry: Option<EntryPayload>,
    /// Commit status.
    pub status: RowStatus,
}

impl RowOutcome {
    /// Returns whether the row was committed.
    pub const fn is_committed(&self) -> bool {
        matches!(self.status, RowStatus::Committed { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered per-row results of one commit pass. No rollback happens on partial failure.
pub struct CommitReport {
    /// One outcome per body row, top to bottom.
    pub rows: Vec<RowOutcome>,
}

impl CommitReport {
    /// Rows whose entry was stored.
    pub fn succeeded(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|row| row.is_committed())
    }

    /// Rows that were skipped or whose command failed.
    pub fn failed(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|row| !row.is_committed())
    }

    /// Returns whether every row was committed.
    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }
}

#[derive(Clone)]
/// Reads rendered rows from a [`TableView`] and persists them one `updated_entry` call at a
/// time.
pub struct EditCommitter {
    commands: Rc<dyn RemoteCommandClient>,
    view: Rc<dyn TableView>,
    roles: ColumnRoles,
}

impl fmt::Debug for EditCommitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditCommitter")
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

impl EditCommitter {
    /// Creates a committer reading from `view` and sending through `commands`.
    pub fn new(commands: Rc<dyn RemoteCommandClient>, view: Rc<dyn TableView>) -> Self {
        Self {
            commands,
            view,
            roles: ColumnRoles::default(),
        }
    }

    /// Uses `roles` to bind each row's key and value.
    pub fn with_roles(mut self, roles: ColumnRoles) -> Self {
        self.roles = roles;
        self
    }

    /// Commits every body row of `table_id`, top to bottom.
    ///
    /// Each row's command completes before the next one starts. A failing row is logged and
    /// recorded; the remaining rows are still committed.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::TableNotFound`] when no table has `table_id`.
    pub async fn commit(&self, table_id: &str) -> Result<CommitReport, TableSyncError> {
        let rows = self
            .view
            .read_rows(table_id)
            .map_err(TableSyncError::from)
            .inspect_err(|err| logging::error!("{err}"))?;

        let mut report = CommitReport::default();
        for (index, cells) in rows.iter().enumerate() {
            let entry = match self.roles.bind(cells) {
                Ok(entry) => entry,
                Err(err) => {
                    logging::warn!("table `{table_id}` row {index} skipped: {err}");
                    report.rows.push(RowOutcome {
                        row: index,
                        entry: None,
                        status: RowStatus::Failed(err),
                    });
                    continue;
                }
            };

            logging::log!(
                "table `{table_id}` row {index}: key `{}`, value `{}`",
                entry.key,
                entry.value
            );
            let status = match commands::updated_entry(self.commands.as_ref(), &entry).await {
                Ok(acknowledged) => RowStatus::Committed { acknowledged },
                Err(err) => {
                    logging::error!("cannot send the updated pair for row {index}: {err}");
                    RowStatus::Failed(err)
                }
            };
            report.rows.push(RowOutcome {
                row: index,
                entry: Some(entry),
                status,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{ColumnIndex, MemoryRemoteCommandClient, MemoryTableView};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn echo_client() -> MemoryRemoteCommandClient {
        MemoryRemoteCommandClient::with_handler(|_, args| Ok(args["payload"]["value"].clone()))
    }

    fn committer_over(
        client: &MemoryRemoteCommandClient,
        view: &MemoryTableView,
    ) -> EditCommitter {
        EditCommitter::new(Rc::new(client.clone()), Rc::new(view.clone()))
    }

    fn payload(key: &str, value: &str) -> Value {
        json!({ "payload": { "key": key, "value": value } })
    }

    #[test]
    fn commits_each_row_in_order_with_positional_key_and_value() {
        let client = echo_client();
        let view = MemoryTableView::default();
        view.mount_with_rows(
            "entries",
            vec![strings(&["u1", "k1", "v1"]), strings(&["u2", "k2", "v2"])],
        );

        let report = block_on(committer_over(&client, &view).commit("entries")).expect("commit");

        assert_eq!(
            client.calls_to("updated_entry"),
            vec![payload("k1", "v1"), payload("k2", "v2")]
        );
        assert_eq!(client.calls().len(), 2);
        assert!(report.is_clean());
        assert_eq!(
            report.rows[1],
            RowOutcome {
                row: 1,
                entry: Some(EntryPayload::new("k2", "v2")),
                status: RowStatus::Committed {
                    acknowledged: "v2".to_string()
                },
            }
        );
    }

    #[test]
    fn failing_row_does_not_stop_later_rows() {
        let client = MemoryRemoteCommandClient::with_handler(|_, args| {
            if args["payload"]["key"] == "k2" {
                Err("store locked".to_string())
            } else {
                Ok(args["payload"]["value"].clone())
            }
        });
        let view = MemoryTableView::default();
        view.mount_with_rows(
            "entries",
            vec![
                strings(&["k1", "v1"]),
                strings(&["k2", "v2"]),
                strings(&["k3", "v3"]),
            ],
        );

        let report = block_on(committer_over(&client, &view).commit("entries")).expect("commit");

        assert_eq!(
            client.calls_to("updated_entry"),
            vec![payload("k1", "v1"), payload("k2", "v2"), payload("k3", "v3")]
        );
        assert!(!report.is_clean());
        assert_eq!(
            report.succeeded().map(|row| row.row).collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert_eq!(
            report.failed().map(|row| &row.status).collect::<Vec<_>>(),
            vec![&RowStatus::Failed(TableSyncError::CommandFailure {
                command: "updated_entry".to_string(),
                message: "store locked".to_string(),
            })]
        );
    }

    #[test]
    fn short_rows_are_skipped_without_a_command() {
        let client = echo_client();
        let view = MemoryTableView::default();
        view.mount_with_rows("entries", vec![strings(&["lonely"]), strings(&["k", "v"])]);

        let report = block_on(committer_over(&client, &view).commit("entries")).expect("commit");

        assert_eq!(client.calls_to("updated_entry"), vec![payload("k", "v")]);
        assert_eq!(
            report.rows[0].status,
            RowStatus::Failed(TableSyncError::MissingCell {
                column: ColumnIndex::PENULTIMATE,
                cells: 1,
            })
        );
        assert_eq!(report.rows[0].entry, None);
    }

    #[test]
    fn committed_values_reflect_user_edits() {
        let client = echo_client();
        let view = MemoryTableView::default();
        view.mount("entries");
        view.render(
            "entries",
            &strings(&["User", "Key", "Value"]),
            &[strings(&["u1", "k1", "old"])],
            &[ColumnIndex::LAST],
        )
        .expect("render");
        view.edit_cell("entries", 0, 2, "new").expect("edit");

        block_on(committer_over(&client, &view).commit("entries")).expect("commit");

        assert_eq!(client.calls_to("updated_entry"), vec![payload("k1", "new")]);
    }

    #[test]
    fn custom_roles_bind_configured_columns() {
        let client = echo_client();
        let view = MemoryTableView::default();
        view.mount_with_rows("entries", vec![strings(&["id-1", "label", "value"])]);
        let committer = committer_over(&client, &view).with_roles(ColumnRoles {
            key: ColumnIndex::FromStart(0),
            value: ColumnIndex::LAST,
        });

        block_on(committer.commit("entries")).expect("commit");

        assert_eq!(
            client.calls_to("updated_entry"),
            vec![payload("id-1", "value")]
        );
    }

    #[test]
    fn missing_table_fails_the_commit() {
        let client = echo_client();
        let view = MemoryTableView::default();

        let err = block_on(committer_over(&client, &view).commit("ghost")).expect_err("no table");

        assert_eq!(
            err,
            TableSyncError::TableNotFound {
                table_id: "ghost".to_string()
            }
        );
        assert!(client.calls().is_empty());
    }

    #[test]
    fn empty_body_commits_nothing() {
        let client = echo_client();
        let view = MemoryTableView::default();
        view.mount("entries");

        let report = block_on(committer_over(&client, &view).commit("entries")).expect("commit");

        assert!(report.rows.is_empty());
        assert!(report.is_clean());
        assert!(client.calls().is_empty());
    }
}
