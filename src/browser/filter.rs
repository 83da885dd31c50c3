//! DOM side of the file table filter.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::consts::{CATEGORY_FILTER_ID, FILE_ROW_SELECTOR, FILE_SEARCH_ID};
use crate::error::PortalError;
use crate::filter::{FileFilter, FileRow};

/// Show exactly the rows matching the current search and category controls.
/// Does nothing when the page has neither control.
pub fn apply(doc: &Document) -> Result<(), PortalError> {
    let search = dom::by_id(doc, FILE_SEARCH_ID);
    let category = dom::by_id(doc, CATEGORY_FILTER_ID);
    if search.is_none() && category.is_none() {
        return Ok(());
    }

    let filter = FileFilter::new(
        &search.as_ref().map(dom::control_value).unwrap_or_default(),
        &category.as_ref().map(dom::control_value).unwrap_or_default(),
    );

    let mut shown = 0_usize;
    for row in dom::query_all(doc, FILE_ROW_SELECTOR)? {
        let Some(row) = row.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let data = row.dataset();
        let attrs = FileRow::new(data.get("filename").unwrap_or_default(), data.get("category").unwrap_or_default());
        let style = row.style();
        if filter.matches_row(&attrs) {
            shown += 1;
            style.remove_property("display")?;
        } else {
            style.set_property("display", "none")?;
        }
    }
    log::debug!("file filter left {shown} rows visible");
    Ok(())
}
