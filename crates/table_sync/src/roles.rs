use platform_host::{ColumnIndex, EntryPayload};
use serde::{Deserialize, Serialize};

use crate::TableSyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Which cells of a rendered row hold the entry key and the editable value.
///
/// The default binds the second-to-last cell as key and the last cell as value.
pub struct ColumnRoles {
    /// Column holding the entry key.
    pub key: ColumnIndex,
    /// Column holding the entry value. This is the only editable column.
    pub value: ColumnIndex,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            key: ColumnIndex::PENULTIMATE,
            value: ColumnIndex::LAST,
        }
    }
}

impl ColumnRoles {
    /// Columns made editable when a table renders in editable mode.
    pub fn editable_columns(&self) -> [ColumnIndex; 1] {
        [self.value]
    }

    /// Binds a rendered row to the key/value pair it commits.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MissingCell`] when the row is too short for either column.
    pub fn bind(&self, row: &[String]) -> Result<EntryPayload, TableSyncError> {
        let cell = |column: ColumnIndex| {
            column
                .resolve(row.len())
                .map(|index| row[index].clone())
                .ok_or(TableSyncError::MissingCell {
                    column,
                    cells: row.len(),
                })
        };
        Ok(EntryPayload {
            key: cell(self.key)?,
            value: cell(self.value)?,
        })
    }
}
