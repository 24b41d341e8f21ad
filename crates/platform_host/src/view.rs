//! Table view contracts and the in-memory view.
//!
//! A [`TableView`] owns rendered tables addressed by id. The engine renders into it and later
//! reads rows back from it, so the view (not the loaded data) is the source of truth for edits.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "from", content = "offset", rename_all = "snake_case")]
/// Position of a cell within a row, counted from either end.
pub enum ColumnIndex {
    /// Zero-based index from the first cell.
    FromStart(usize),
    /// One-based index from the last cell (`FromEnd(1)` is the last cell).
    FromEnd(usize),
}

impl ColumnIndex {
    /// The last cell of a row.
    pub const LAST: Self = Self::FromEnd(1);
    /// The second-to-last cell of a row.
    pub const PENULTIMATE: Self = Self::FromEnd(2);

    /// Resolves to a zero-based index in a row of `len` cells, if the row is long enough.
    pub const fn resolve(self, len: usize) -> Option<usize> {
        match self {
            Self::FromStart(index) if index < len => Some(index),
            Self::FromEnd(offset) if offset >= 1 && offset <= len => Some(len - offset),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromStart(index) => write!(f, "column {index}"),
            Self::FromEnd(1) => f.write_str("last column"),
            Self::FromEnd(offset) => write!(f, "column {offset} from the end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structural lookup failure in a [`TableView`].
pub enum ViewError {
    /// No table exists with the requested id.
    TableNotFound {
        /// Requested table id.
        table_id: String,
    },
    /// The table exists but lacks a header or body section.
    SectionsMissing {
        /// Requested table id.
        table_id: String,
    },
    /// The rendering surface refused a mutation or lookup.
    Rejected {
        /// Requested table id.
        table_id: String,
        /// Host error text.
        message: String,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableNotFound { table_id } => {
                write!(f, "cannot find the table with an id of `{table_id}`")
            }
            Self::SectionsMissing { table_id } => write!(
                f,
                "table `{table_id}` has no header or body section to render into"
            ),
            Self::Rejected { table_id, message } => {
                write!(f, "table `{table_id}` rejected the update: {message}")
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Host capability that renders tables and reads rendered rows back.
pub trait TableView {
    /// Inserts or replaces the caption shown at the top of the table.
    ///
    /// Fails with [`ViewError::TableNotFound`] when no table has `table_id`.
    fn set_caption(&self, table_id: &str, caption: &str) -> Result<(), ViewError>;

    /// Replaces header and body content.
    ///
    /// Sections are verified before anything is cleared, so a failed render leaves the previous
    /// content in place. Cells whose position matches any entry of `editable` become
    /// user-editable; every other cell is read-only.
    fn render(
        &self,
        table_id: &str,
        headers: &[String],
        rows: &[Vec<String>],
        editable: &[ColumnIndex],
    ) -> Result<(), ViewError>;

    /// Returns the current text of every body row, top to bottom.
    fn read_rows(&self, table_id: &str) -> Result<Vec<Vec<String>>, ViewError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered body cell.
pub struct RenderedCell {
    /// Current cell text.
    pub text: String,
    /// Whether the user may edit the cell in place.
    pub editable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Snapshot of a table held by [`MemoryTableView`].
pub struct RenderedTable {
    /// Current caption, if one was set.
    pub caption: Option<String>,
    /// Whether the table has header and body sections.
    pub has_sections: bool,
    /// Header cell texts.
    pub headers: Vec<String>,
    /// Body rows.
    pub rows: Vec<Vec<RenderedCell>>,
}

impl RenderedTable {
    /// Returns body texts without editability flags.
    pub fn row_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
            .collect()
    }

    /// Returns the editability flag of every body cell.
    pub fn editable_mask(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.editable).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory table view used by tests and headless composition. Clones share tables.
pub struct MemoryTableView {
    inner: Rc<RefCell<BTreeMap<String, RenderedTable>>>,
}

impl MemoryTableView {
    /// Adds an empty table with header and body sections.
    pub fn mount(&self, table_id: impl Into<String>) {
        self.inner.borrow_mut().insert(
            table_id.into(),
            RenderedTable {
                has_sections: true,
                ..RenderedTable::default()
            },
        );
    }

    /// Adds a table element that has neither header nor body section.
    pub fn mount_without_sections(&self, table_id: impl Into<String>) {
        self.inner
            .borrow_mut()
            .insert(table_id.into(), RenderedTable::default());
    }

    /// Adds a table whose body already shows `rows`, all read-only.
    pub fn mount_with_rows(&self, table_id: impl Into<String>, rows: Vec<Vec<String>>) {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|text| RenderedCell {
                        text,
                        editable: false,
                    })
                    .collect()
            })
            .collect();
        self.inner.borrow_mut().insert(
            table_id.into(),
            RenderedTable {
                has_sections: true,
                rows,
                ..RenderedTable::default()
            },
        );
    }

    /// Returns a copy of the table's current state.
    pub fn snapshot(&self, table_id: &str) -> Option<RenderedTable> {
        self.inner.borrow().get(table_id).cloned()
    }

    /// Simulates a user typing `text` into a cell.
    ///
    /// # Errors
    ///
    /// Returns an error when the cell does not exist or is not editable.
    pub fn edit_cell(
        &self,
        table_id: &str,
        row: usize,
        column: usize,
        text: impl Into<String>,
    ) -> Result<(), String> {
        let mut tables = self.inner.borrow_mut();
        let cell = tables
            .get_mut(table_id)
            .and_then(|table| table.rows.get_mut(row))
            .and_then(|cells| cells.get_mut(column))
            .ok_or_else(|| format!("no cell at row {row}, column {column} in `{table_id}`"))?;
        if !cell.editable {
            return Err(format!("cell at row {row}, column {column} is read-only"));
        }
        cell.text = text.into();
        Ok(())
    }
}

impl TableView for MemoryTableView {
    fn set_caption(&self, table_id: &str, caption: &str) -> Result<(), ViewError> {
        let mut tables = self.inner.borrow_mut();
        let table = tables.get_mut(table_id).ok_or_else(|| ViewError::TableNotFound {
            table_id: table_id.to_string(),
        })?;
        table.caption = Some(caption.to_string());
        Ok(())
    }

    fn render(
        &self,
        table_id: &str,
        headers: &[String],
        rows: &[Vec<String>],
        editable: &[ColumnIndex],
    ) -> Result<(), ViewError> {
        let mut tables = self.inner.borrow_mut();
        let table = tables.get_mut(table_id).ok_or_else(|| ViewError::TableNotFound {
            table_id: table_id.to_string(),
        })?;
        if !table.has_sections {
            return Err(ViewError::SectionsMissing {
                table_id: table_id.to_string(),
            });
        }

        table.headers = headers.to_vec();
        table.rows = rows
            .iter()
            .map(|row| {
                let editable_at: Vec<usize> = editable
                    .iter()
                    .filter_map(|column| column.resolve(row.len()))
                    .collect();
                row.iter()
                    .enumerate()
                    .map(|(index, text)| RenderedCell {
                        text: text.clone(),
                        editable: editable_at.contains(&index),
                    })
                    .collect()
            })
            .collect();
        Ok(())
    }

    fn read_rows(&self, table_id: &str) -> Result<Vec<Vec<String>>, ViewError> {
        self.inner
            .borrow()
            .get(table_id)
            .map(RenderedTable::row_texts)
            .ok_or_else(|| ViewError::TableNotFound {
                table_id: table_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn column_index_resolves_from_either_end() {
        assert_eq!(ColumnIndex::LAST.resolve(3), Some(2));
        assert_eq!(ColumnIndex::PENULTIMATE.resolve(3), Some(1));
        assert_eq!(ColumnIndex::FromStart(0).resolve(3), Some(0));
        assert_eq!(ColumnIndex::PENULTIMATE.resolve(1), None);
        assert_eq!(ColumnIndex::FromStart(3).resolve(3), None);
        assert_eq!(ColumnIndex::FromEnd(0).resolve(3), None);
        assert_eq!(ColumnIndex::LAST.resolve(0), None);
    }

    #[test]
    fn render_marks_only_requested_columns_editable() {
        let view = MemoryTableView::default();
        view.mount("grid");

        view.render(
            "grid",
            &strings(&["A", "B", "C"]),
            &[strings(&["1", "2", "3"]), strings(&["4", "5"])],
            &[ColumnIndex::LAST],
        )
        .expect("render");

        let table = view.snapshot("grid").expect("table");
        assert_eq!(table.headers, strings(&["A", "B", "C"]));
        assert_eq!(
            table.editable_mask(),
            vec![vec![false, false, true], vec![false, true]]
        );
    }

    #[test]
    fn render_without_sections_keeps_previous_state() {
        let view = MemoryTableView::default();
        view.mount_without_sections("bare");
        view.set_caption("bare", "Caption").expect("caption");

        let err = view
            .render("bare", &strings(&["A"]), &[strings(&["1"])], &[])
            .expect_err("no sections");

        assert_eq!(
            err,
            ViewError::SectionsMissing {
                table_id: "bare".to_string()
            }
        );
        let table = view.snapshot("bare").expect("table");
        assert_eq!(table.caption.as_deref(), Some("Caption"));
        assert!(table.rows.is_empty());
    }

    #[test]
    fn caption_is_replaced_not_stacked() {
        let view = MemoryTableView::default();
        view.mount("grid");
        view.set_caption("grid", "First").expect("first caption");
        view.set_caption("grid", "Second").expect("second caption");
        assert_eq!(
            view.snapshot("grid").and_then(|t| t.caption).as_deref(),
            Some("Second")
        );
    }

    #[test]
    fn edits_are_limited_to_editable_cells() {
        let view = MemoryTableView::default();
        view.mount("grid");
        view.render(
            "grid",
            &strings(&["Key", "Value"]),
            &[strings(&["k1", "v1"])],
            &[ColumnIndex::LAST],
        )
        .expect("render");

        view.edit_cell("grid", 0, 1, "v1-edited").expect("edit value");
        let err = view.edit_cell("grid", 0, 0, "nope").expect_err("key is read-only");

        assert_eq!(err, "cell at row 0, column 0 is read-only");
        assert_eq!(
            view.read_rows("grid").expect("rows"),
            vec![strings(&["k1", "v1-edited"])]
        );
    }

    #[test]
    fn missing_table_is_reported_for_every_operation() {
        let view = MemoryTableView::default();
        let expected = ViewError::TableNotFound {
            table_id: "ghost".to_string(),
        };
        assert_eq!(view.set_caption("ghost", "x"), Err(expected.clone()));
        assert_eq!(view.render("ghost", &[], &[], &[]), Err(expected.clone()));
        assert_eq!(view.read_rows("ghost"), Err(expected));
    }

    #[test]
    fn column_index_serializes_with_named_end() {
        let raw = serde_json::to_string(&ColumnIndex::PENULTIMATE).expect("serialize");
        assert_eq!(raw, r#"{"from":"from_end","offset":2}"#);
    }
}
