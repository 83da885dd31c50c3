//! Calls into the host page's Bootstrap widgets.
//!
//! The widgets are looked up on the global `bootstrap` object at call time,
//! so a page that does not load Bootstrap gets an error instead of a trap.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error::PortalError;
use crate::session::Dialog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Modal,
    Alert,
    Tooltip,
}

impl Widget {
    fn class_name(self) -> &'static str {
        match self {
            Self::Modal => "Modal",
            Self::Alert => "Alert",
            Self::Tooltip => "Tooltip",
        }
    }
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, PortalError> {
    let value = Reflect::get(target, &JsValue::from_str(name))?;
    if value.is_undefined() {
        return Err(PortalError::Js(format!("{name} is undefined")));
    }
    Ok(value)
}

/// The widget instance bound to `element`, creating it if needed.
pub fn instance(widget: Widget, element: &Element) -> Result<JsValue, PortalError> {
    let bootstrap = property(&js_sys::global(), "bootstrap")?;
    let class = property(&bootstrap, widget.class_name())?;
    let factory: Function = property(&class, "getOrCreateInstance")?.dyn_into()?;
    Ok(factory.call1(&class, element)?)
}

/// Call a no-argument method such as `show`, `hide` or `close`.
pub fn invoke(instance: &JsValue, method: &str) -> Result<(), PortalError> {
    let function: Function = property(instance, method)?.dyn_into()?;
    function.call0(instance)?;
    Ok(())
}

/// Session warning dialog backed by a Bootstrap modal.
pub struct ModalDialog {
    element: Element,
    shown: bool,
}

impl ModalDialog {
    pub fn new(element: Element) -> Self {
        Self { element, shown: false }
    }

    fn call(&self, method: &str) {
        if let Err(err) = instance(Widget::Modal, &self.element).and_then(|modal| invoke(&modal, method)) {
            log::warn!("session dialog {method} failed: {err}");
        }
    }
}

impl Dialog for ModalDialog {
    fn show(&mut self) {
        self.call("show");
        self.shown = true;
    }

    fn hide(&mut self) {
        self.call("hide");
        self.shown = false;
    }

    /// The `show` class lags behind a fade-in, so our own call counts too.
    fn is_visible(&self) -> bool {
        self.shown || self.element.class_list().contains("show")
    }
}
