//! Page-load wiring for the stateless behaviors: alerts, tooltips,
//! delete confirmation, download buttons, form validation and the password
//! meter.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

use super::dom;
use super::widgets::{self, Widget};
use crate::config::{PortalConfig, timer_millis};
use crate::confirm::{Decision, Prompt, confirm_destructive};
use crate::consts::{
    AUTO_DISMISS_ALERT_SELECTOR, CONFIRM_DELETE_SELECTOR, DOWNLOAD_BUTTON_SELECTOR, NEEDS_VALIDATION_SELECTOR,
    PASSWORD_HINT_ID, PASSWORD_INPUT_ID, PASSWORD_STRENGTH_ID, TOOLTIP_SELECTOR, WAS_VALIDATED_CLASS,
};
use crate::download::{BusyControl, DownloadBusy};
use crate::error::PortalError;
use crate::password::{Strength, policy_hint};
use crate::validation::{Submission, ValidatedForm, gate_submission};

// ── Alerts ──────────────────────────────────────────────────────

/// Close every non-permanent alert after the configured delay.
pub fn install_alert_auto_dismiss(doc: &Document, config: &PortalConfig) -> Result<(), PortalError> {
    let millis = timer_millis(config.alert_dismiss_delay());
    for alert in dom::query_all(doc, AUTO_DISMISS_ALERT_SELECTOR)? {
        Timeout::new(millis, move || {
            if let Err(err) = widgets::instance(Widget::Alert, &alert).and_then(|a| widgets::invoke(&a, "close")) {
                log::warn!("alert auto-dismiss failed: {err}");
            }
        })
        .forget();
    }
    Ok(())
}

// ── Tooltips ────────────────────────────────────────────────────

pub fn install_tooltips(doc: &Document) -> Result<(), PortalError> {
    let hosts = dom::query_all(doc, TOOLTIP_SELECTOR)?;
    let mut attached = 0_usize;
    for host in &hosts {
        match widgets::instance(Widget::Tooltip, host) {
            Ok(_) => attached += 1,
            Err(err) => log::warn!("tooltip init failed: {err}"),
        }
    }
    log::debug!("attached {attached} of {} tooltips", hosts.len());
    Ok(())
}

// ── Delete confirmation ─────────────────────────────────────────

struct WindowPrompt(Window);

impl Prompt for WindowPrompt {
    type Error = JsValue;

    fn confirm(&self, message: &str) -> Result<bool, JsValue> {
        self.0.confirm_with_message(message)
    }
}

pub fn install_delete_confirmation(doc: &Document, window: &Window) -> Result<(), PortalError> {
    for control in dom::query_all(doc, CONFIRM_DELETE_SELECTOR)? {
        let prompt = WindowPrompt(window.clone());
        dom::listen(&control, "click", move |event| {
            if confirm_destructive(&prompt) == Decision::Cancel {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

// ── Download buttons ────────────────────────────────────────────

struct ButtonControl(Element);

impl BusyControl for ButtonControl {
    fn label_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_label_html(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_disabled(&mut self, disabled: bool) {
        let result = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(err) = result {
            log::warn!("download button disabled={disabled} failed: {err:?}");
        }
    }
}

/// Busy state plus the control it drives, shared by click and timer callbacks.
struct DownloadButton {
    busy: DownloadBusy,
    control: ButtonControl,
}

impl DownloadButton {
    fn begin(&mut self) -> bool {
        self.busy.begin(&mut self.control)
    }

    fn complete(&mut self) -> bool {
        self.busy.complete(&mut self.control)
    }
}

pub fn install_download_buttons(doc: &Document, config: &PortalConfig) -> Result<(), PortalError> {
    let millis = timer_millis(config.download_reset_delay());
    for element in dom::query_all(doc, DOWNLOAD_BUTTON_SELECTOR)? {
        let button =
            Rc::new(RefCell::new(DownloadButton { busy: DownloadBusy::new(), control: ButtonControl(element.clone()) }));
        dom::listen(&element, "click", move |_| {
            if !button.borrow_mut().begin() {
                return;
            }
            let button = Rc::clone(&button);
            Timeout::new(millis, move || {
                button.borrow_mut().complete();
            })
            .forget();
        })?;
    }
    Ok(())
}

// ── Form validation ─────────────────────────────────────────────

struct FormGate(HtmlFormElement);

impl ValidatedForm for FormGate {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn mark_validated(&mut self) {
        if let Err(err) = self.0.class_list().add_1(WAS_VALIDATED_CLASS) {
            log::warn!("could not mark form validated: {err:?}");
        }
    }
}

pub fn install_form_validation(doc: &Document) -> Result<(), PortalError> {
    for element in dom::query_all(doc, NEEDS_VALIDATION_SELECTOR)? {
        let Some(form) = element.dyn_ref::<HtmlFormElement>().cloned() else {
            log::debug!("skipping non-form element marked for validation");
            continue;
        };
        let mut gate = FormGate(form.clone());
        dom::listen(&form, "submit", move |event| {
            if gate_submission(&mut gate) == Submission::Block {
                event.prevent_default();
                event.stop_propagation();
            }
        })?;
    }
    Ok(())
}

// ── Password meter ──────────────────────────────────────────────

pub fn install_password_meter(doc: &Document) -> Result<(), PortalError> {
    let Some(input) = dom::by_id_as::<HtmlInputElement>(doc, PASSWORD_INPUT_ID, "input")? else {
        return Ok(());
    };
    let doc = doc.clone();
    let source = input.clone();
    dom::listen(&input, "input", move |_| {
        let password = source.value();
        if let Some(badge) = dom::by_id(&doc, PASSWORD_STRENGTH_ID) {
            let strength = Strength::of(&password);
            badge.set_class_name(&strength.badge_class());
            badge.set_text_content(Some(strength.label()));
        }
        if let Some(hint) = dom::by_id(&doc, PASSWORD_HINT_ID) {
            let text = if password.is_empty() { String::new() } else { policy_hint(&password) };
            hint.set_text_content(Some(&text));
        }
    })?;
    Ok(())
}

