//! Thin helpers over `web-sys` lookups and listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::PortalError;

pub fn window() -> Result<Window, PortalError> {
    web_sys::window().ok_or(PortalError::NoEnvironment("window"))
}

pub fn document() -> Result<Document, PortalError> {
    window()?.document().ok_or(PortalError::NoEnvironment("document"))
}

/// Element with `id`, if present.
pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

/// Element with `id` cast to `T`. Absent is `Ok(None)`; present but of the
/// wrong type is an error.
pub fn by_id_as<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Result<Option<T>, PortalError> {
    match by_id(doc, id) {
        None => Ok(None),
        Some(el) => el
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| PortalError::UnexpectedElement { id: id.to_owned(), expected }),
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PortalError> {
    let list = doc.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PortalError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Current `value` of an input or select, empty for anything else.
pub fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}
