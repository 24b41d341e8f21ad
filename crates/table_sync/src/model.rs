//! Table resource model and JSON decoding.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::TableSyncError;

/// One body row: cell texts in column order.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Headers and rows of a table resource, with every cell already stringified.
///
/// Rows are not required to match the header count; ragged rows render as they are.
pub struct TableDescriptor {
    /// Header cell texts, in order.
    pub headers: Vec<String>,
    /// Body rows, in order.
    pub rows: Vec<Row>,
}

#[derive(Deserialize)]
struct RawTable {
    headers: Vec<Value>,
    rows: Vec<Vec<Value>>,
}

impl TableDescriptor {
    /// Decodes a `{ "headers": [...], "rows": [[...], ...] }` resource body.
    ///
    /// # Errors
    ///
    /// Returns [`TableSyncError::MalformedResponse`] when the body is not JSON or either field
    /// is missing or has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, TableSyncError> {
        let table: RawTable = serde_json::from_str(raw)
            .map_err(|err| TableSyncError::MalformedResponse(err.to_string()))?;
        Ok(Self {
            headers: table.headers.iter().map(stringify_cell).collect(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(stringify_cell).collect())
                .collect(),
        })
    }

    /// Returns the indexes of rows whose length differs from the header count.
    pub fn ragged_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != self.headers.len())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Renders a JSON cell value as display text.
///
/// Strings render verbatim and `null` renders empty. Numbers render without a fractional part
/// when they have none (`1.0` and `1e3` render as `1` and `1000`). Every other value renders as
/// compact JSON.
pub fn stringify_cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => format_number(number),
        other => other.to_string(),
    }
}

fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        // f64 display drops a zero fraction; only negative zero needs fixing up.
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_headers_and_rows_in_order() {
        let table = TableDescriptor::from_json(
            r#"{"headers":["Name","Age"],"rows":[["Ann","30"],["Bo","25"]]}"#,
        )
        .expect("decode");

        assert_eq!(table.headers, vec!["Name", "Age"]);
        assert_eq!(table.rows, vec![vec!["Ann", "30"], vec!["Bo", "25"]]);
        assert!(table.ragged_rows().is_empty());
    }

    #[test]
    fn primitives_are_stringified() {
        assert_eq!(stringify_cell(&json!(30)), "30");
        assert_eq!(stringify_cell(&json!(2.5)), "2.5");
        assert_eq!(stringify_cell(&json!(true)), "true");
        assert_eq!(stringify_cell(&json!(null)), "");
        assert_eq!(stringify_cell(&json!("text")), "text");
        assert_eq!(stringify_cell(&json!([1, "a"])), r#"[1,"a"]"#);
    }

    #[test]
    fn whole_number_floats_render_like_integers() {
        let table =
            TableDescriptor::from_json(r#"{"headers":["K","V"],"rows":[["k",1.0],["e",1e3]]}"#)
                .expect("decode");
        assert_eq!(table.rows, vec![vec!["k", "1"], vec!["e", "1000"]]);

        assert_eq!(stringify_cell(&json!(-2.0)), "-2");
        assert_eq!(stringify_cell(&json!(-0.0)), "0");
        assert_eq!(stringify_cell(&json!(0.25)), "0.25");
        assert_eq!(stringify_cell(&json!(-7)), "-7");
        assert_eq!(stringify_cell(&json!(u64::MAX)), u64::MAX.to_string());
    }

    #[test]
    fn ragged_rows_are_kept_and_reported() {
        let table = TableDescriptor::from_json(
            r#"{"headers":["A","B"],"rows":[["1"],["2","3"],["4","5","6"]]}"#,
        )
        .expect("decode");

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.ragged_rows(), vec![0, 2]);
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        for raw in [
            "not json",
            r#"{"headers":["A"]}"#,
            r#"{"rows":[]}"#,
            r#"{"headers":"A","rows":[]}"#,
            r#"{"headers":[],"rows":["flat"]}"#,
        ] {
            let err = TableDescriptor::from_json(raw).expect_err(raw);
            assert!(
                matches!(err, TableSyncError::MalformedResponse(_)),
                "unexpected error for {raw}: {err:?}"
            );
        }
    }
}
