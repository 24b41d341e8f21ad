//! DOM-backed table view.
//!
//! Tables are `<table id=...>` elements with `<thead>` and `<tbody>` sections. Editable cells
//! carry `contenteditable="true"`, so the DOM holds the edited text that is later read back.

use platform_host::{ColumnIndex, TableView, ViewError};

#[derive(Debug, Clone, Copy, Default)]
/// Table view rendering into the current document.
///
/// Outside wasm32 there is no document and every table lookup fails with
/// [`ViewError::TableNotFound`].
pub struct DomTableView;

#[cfg(target_arch = "wasm32")]
mod dom {
    use platform_host::{ColumnIndex, ViewError};
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    pub(super) fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    pub(super) fn table(table_id: &str) -> Result<(Document, Element), ViewError> {
        let not_found = || ViewError::TableNotFound {
            table_id: table_id.to_string(),
        };
        let document = document().ok_or_else(not_found)?;
        let table = document.get_element_by_id(table_id).ok_or_else(not_found)?;
        Ok((document, table))
    }

    pub(super) fn rejected(table_id: &str) -> impl Fn(JsValue) -> ViewError + '_ {
        move |err| ViewError::Rejected {
            table_id: table_id.to_string(),
            message: format!("{err:?}"),
        }
    }

    pub(super) fn set_caption(table_id: &str, caption: &str) -> Result<(), ViewError> {
        let (document, table) = table(table_id)?;
        let existing = table
            .query_selector(":scope > caption")
            .map_err(rejected(table_id))?;
        let caption_el = match existing {
            Some(caption_el) => caption_el,
            None => {
                let caption_el = document
                    .create_element("caption")
                    .map_err(rejected(table_id))?;
                table
                    .insert_before(&caption_el, table.first_child().as_ref())
                    .map_err(rejected(table_id))?;
                caption_el
            }
        };
        caption_el.set_text_content(Some(caption));
        Ok(())
    }

    pub(super) fn render(
        table_id: &str,
        headers: &[String],
        rows: &[Vec<String>],
        editable: &[ColumnIndex],
    ) -> Result<(), ViewError> {
        let (document, table) = table(table_id)?;
        let section = |selector: &str| table.query_selector(selector).ok().flatten();
        let (Some(thead), Some(tbody)) = (section("thead"), section("tbody")) else {
            return Err(ViewError::SectionsMissing {
                table_id: table_id.to_string(),
            });
        };

        thead.set_inner_html("");
        tbody.set_inner_html("");

        let header_row = document.create_element("tr").map_err(rejected(table_id))?;
        for header in headers {
            let th = document.create_element("th").map_err(rejected(table_id))?;
            th.set_text_content(Some(header));
            header_row.append_child(&th).map_err(rejected(table_id))?;
        }
        thead.append_child(&header_row).map_err(rejected(table_id))?;

        for row in rows {
            let editable_at: Vec<usize> = editable
                .iter()
                .filter_map(|column| column.resolve(row.len()))
                .collect();
            let tr = document.create_element("tr").map_err(rejected(table_id))?;
            for (index, text) in row.iter().enumerate() {
                let td = document.create_element("td").map_err(rejected(table_id))?;
                td.set_text_content(Some(text));
                if editable_at.contains(&index) {
                    td.set_attribute("contenteditable", "true")
                        .map_err(rejected(table_id))?;
                }
                tr.append_child(&td).map_err(rejected(table_id))?;
            }
            tbody.append_child(&tr).map_err(rejected(table_id))?;
        }
        Ok(())
    }

    pub(super) fn read_rows(table_id: &str) -> Result<Vec<Vec<String>>, ViewError> {
        let (_, table) = table(table_id)?;
        let mut rows = Vec::new();
        let bodies = table.get_elements_by_tag_name("tbody");
        for body_index in 0..bodies.length() {
            let Some(body) = bodies.item(body_index) else {
                continue;
            };
            let trs = body.get_elements_by_tag_name("tr");
            for row_index in 0..trs.length() {
                let Some(tr) = trs.item(row_index) else {
                    continue;
                };
                let tds = tr.get_elements_by_tag_name("td");
                rows.push(
                    (0..tds.length())
                        .filter_map(|cell_index| tds.item(cell_index))
                        .map(|td| td.text_content().unwrap_or_default())
                        .collect(),
                );
            }
        }
        Ok(rows)
    }
}

impl TableView for DomTableView {
    fn set_caption(&self, table_id: &str, caption: &str) -> Result<(), ViewError> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::set_caption(table_id, caption)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = caption;
            Err(no_document(table_id))
        }
    }

    fn render(
        &self,
        table_id: &str,
        headers: &[String],
        rows: &[Vec<String>],
        editable: &[ColumnIndex],
    ) -> Result<(), ViewError> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::render(table_id, headers, rows, editable)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (headers, rows, editable);
            Err(no_document(table_id))
        }
    }

    fn read_rows(&self, table_id: &str) -> Result<Vec<Vec<String>>, ViewError> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::read_rows(table_id)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(no_document(table_id))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn no_document(table_id: &str) -> ViewError {
    ViewError::TableNotFound {
        table_id: table_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_view_has_no_tables() {
        let view: &dyn TableView = &DomTableView;
        let expected = ViewError::TableNotFound {
            table_id: "grid".to_string(),
        };
        assert_eq!(view.set_caption("grid", "Grid"), Err(expected.clone()));
        assert_eq!(view.render("grid", &[], &[], &[ColumnIndex::LAST]), Err(expected.clone()));
        assert_eq!(view.read_rows("grid"), Err(expected));
    }
}
