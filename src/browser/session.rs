//! Browser host for the session monitor.
//!
//! Timers are `gloo_timers` handles stored on the host; replacing or dropping
//! a handle cancels it. Timer callbacks hold a weak reference to the monitor
//! so the monitor is kept alive only by the page-lifetime listeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, Element, Window};

use super::dom;
use super::widgets::ModalDialog;
use crate::config::{PortalConfig, timer_millis};
use crate::consts::{SESSION_WARNING_MODAL_ID, STAY_LOGGED_IN_ID, TIME_REMAINING_ID};
use crate::error::PortalError;
use crate::session::{Activity, SessionHost, SessionMonitor, SessionTimer};

pub type BrowserMonitor = SessionMonitor<ModalDialog, BrowserSessionHost>;

pub struct BrowserSessionHost {
    monitor: Weak<RefCell<BrowserMonitor>>,
    window: Window,
    countdown_label: Option<Element>,
    warning: Option<Timeout>,
    logout: Option<Timeout>,
    countdown: Option<Interval>,
}

impl BrowserSessionHost {
    fn new(monitor: Weak<RefCell<BrowserMonitor>>, window: Window, countdown_label: Option<Element>) -> Self {
        Self { monitor, window, countdown_label, warning: None, logout: None, countdown: None }
    }
}

impl SessionHost for BrowserSessionHost {
    fn arm(&mut self, timer: SessionTimer, delay: Duration) {
        let monitor = self.monitor.clone();
        let millis = timer_millis(delay);
        match timer {
            SessionTimer::Warning => {
                self.warning = Some(Timeout::new(millis, move || fire(&monitor, timer)));
            }
            SessionTimer::Logout => {
                self.logout = Some(Timeout::new(millis, move || fire(&monitor, timer)));
            }
            SessionTimer::Countdown => {
                self.countdown = Some(Interval::new(millis, move || fire(&monitor, timer)));
            }
        }
    }

    fn disarm(&mut self, timer: SessionTimer) {
        match timer {
            SessionTimer::Warning => drop(self.warning.take()),
            SessionTimer::Logout => drop(self.logout.take()),
            SessionTimer::Countdown => drop(self.countdown.take()),
        }
    }

    fn render_countdown(&mut self, text: &str) {
        if let Some(label) = &self.countdown_label {
            label.set_text_content(Some(text));
        }
    }

    fn navigate(&mut self, path: &str) {
        if let Err(err) = self.window.location().set_href(path) {
            log::warn!("logout navigation to {path} failed: {err:?}");
        }
    }
}

fn fire(monitor: &Weak<RefCell<BrowserMonitor>>, timer: SessionTimer) {
    let Some(monitor) = monitor.upgrade() else {
        return;
    };
    match monitor.try_borrow_mut() {
        Ok(mut monitor) => monitor.on_timer(timer),
        Err(_) => log::warn!("session monitor busy, dropped {timer:?} timer"),
    }
}

fn with_monitor(monitor: &Rc<RefCell<BrowserMonitor>>, f: impl FnOnce(&mut BrowserMonitor)) {
    match monitor.try_borrow_mut() {
        Ok(mut monitor) => f(&mut monitor),
        Err(_) => log::debug!("session monitor busy, skipped event"),
    }
}

/// Build the monitor, attach activity listeners and arm the first cycle.
pub fn install(doc: &Document, window: &Window, config: &PortalConfig) -> Result<(), PortalError> {
    let dialog = dom::by_id(doc, SESSION_WARNING_MODAL_ID).map(ModalDialog::new);
    if dialog.is_none() {
        log::debug!("no #{SESSION_WARNING_MODAL_ID}; session warnings will not be shown");
    }
    let countdown_label = dom::by_id(doc, TIME_REMAINING_ID);

    let monitor = Rc::new_cyclic(|weak: &Weak<RefCell<BrowserMonitor>>| {
        let host = BrowserSessionHost::new(weak.clone(), window.clone(), countdown_label);
        RefCell::new(SessionMonitor::new(config, dialog, host))
    });

    for activity in Activity::ALL {
        let monitor = Rc::clone(&monitor);
        dom::listen(doc, activity.event_name(), move |_| {
            with_monitor(&monitor, |m| m.on_activity(activity));
        })?;
    }

    if let Some(button) = dom::by_id(doc, STAY_LOGGED_IN_ID) {
        let monitor = Rc::clone(&monitor);
        dom::listen(&button, "click", move |_| {
            with_monitor(&monitor, BrowserMonitor::stay_logged_in);
        })?;
    }

    monitor.borrow_mut().start();
    Ok(())
}
