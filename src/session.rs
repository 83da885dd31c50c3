//! Session timeout monitor.
//!
//! Warns the user shortly before an inactive session expires and navigates to
//! the logout path once it does. Any user activity restarts the cycle, even
//! while the warning is on screen.
//!
//! The monitor owns its state and talks to the page only through two injected
//! capabilities: a [`Dialog`] for the warning and a [`SessionHost`] for timers,
//! the countdown label and navigation. The browser layer provides real
//! implementations; tests drive the monitor with fakes.
//!
//! ```text
//!            warning timer                logout timer
//!   Idle ─────────────────▶ WarningShown ─────────────▶ LoggedOut
//!    ▲                          │
//!    └──── activity / stay ─────┘
//! ```

use std::time::Duration;

use crate::config::PortalConfig;
use crate::consts::{COUNTDOWN_TICK_MS, WARNING_COUNTDOWN_SECS};
use crate::countdown::Countdown;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Where the monitor is in the expiry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Timers armed, no warning shown.
    Idle,
    /// The warning window has started.
    WarningShown,
    /// Logout navigation has been issued. Terminal.
    LoggedOut,
}

/// Timers the monitor arms through its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionTimer {
    /// One-shot: start the warning window.
    Warning,
    /// One-shot: log the session out.
    Logout,
    /// Repeating: advance the countdown by one second.
    Countdown,
}

/// User activity that keeps a session alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    MouseMove,
    KeyPress,
    Click,
    Scroll,
}

impl Activity {
    pub const ALL: [Self; 4] = [Self::MouseMove, Self::KeyPress, Self::Click, Self::Scroll];

    /// DOM event name for this activity.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::MouseMove => "mousemove",
            Self::KeyPress => "keypress",
            Self::Click => "click",
            Self::Scroll => "scroll",
        }
    }
}

/// The warning dialog widget.
pub trait Dialog {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/// Timer, label and navigation services the monitor depends on.
pub trait SessionHost {
    /// Arm `timer` to fire after `delay`, replacing any pending instance.
    /// [`SessionTimer::Countdown`] repeats every `delay` until disarmed.
    fn arm(&mut self, timer: SessionTimer, delay: Duration);

    /// Cancel `timer` if pending. Disarming an idle timer is a no-op.
    fn disarm(&mut self, timer: SessionTimer);

    /// Write the formatted remaining time to the countdown label.
    fn render_countdown(&mut self, text: &str);

    /// Leave the page for `path`.
    fn navigate(&mut self, path: &str);
}

/// Per-page session timeout controller.
pub struct SessionMonitor<D, H> {
    warning_delay: Duration,
    logout_delay: Duration,
    logout_path: String,
    dialog: Option<D>,
    host: H,
    state: SessionState,
    countdown: Option<Countdown>,
}

impl<D: Dialog, H: SessionHost> SessionMonitor<D, H> {
    /// Build a monitor. `dialog` is `None` when the page has no warning
    /// dialog; timers and logout still run without it.
    pub fn new(config: &PortalConfig, dialog: Option<D>, host: H) -> Self {
        Self {
            warning_delay: config.warning_delay(),
            logout_delay: config.logout_delay(),
            logout_path: config.logout_path.clone(),
            dialog,
            host,
            state: SessionState::Idle,
            countdown: None,
        }
    }

    /// Arm both timers for the first cycle.
    pub fn start(&mut self) {
        log::debug!(
            "session monitor started: warning in {:?}, logout in {:?}",
            self.warning_delay,
            self.logout_delay
        );
        self.reset();
    }

    /// The user did something; restart the cycle.
    pub fn on_activity(&mut self, _activity: Activity) {
        self.reset();
    }

    /// The user confirmed from the dialog that they want to stay.
    pub fn stay_logged_in(&mut self) {
        log::debug!("session extended from warning dialog");
        self.reset();
    }

    /// Dispatch a fired timer.
    pub fn on_timer(&mut self, timer: SessionTimer) {
        match timer {
            SessionTimer::Warning => self.show_warning(),
            SessionTimer::Logout => self.logout(),
            SessionTimer::Countdown => self.tick_countdown(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn reset(&mut self) {
        if self.state == SessionState::LoggedOut {
            return;
        }

        self.host.disarm(SessionTimer::Warning);
        self.host.disarm(SessionTimer::Logout);
        self.stop_countdown();

        if let Some(dialog) = self.dialog.as_mut() {
            if dialog.is_visible() {
                dialog.hide();
            }
        }

        self.state = SessionState::Idle;
        self.host.arm(SessionTimer::Warning, self.warning_delay);
        self.host.arm(SessionTimer::Logout, self.logout_delay);
    }

    fn show_warning(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        self.state = SessionState::WarningShown;

        let Some(dialog) = self.dialog.as_mut() else {
            log::debug!("session warning due but no dialog on page");
            return;
        };
        log::debug!("showing session expiry warning");
        dialog.show();

        let countdown = Countdown::new(WARNING_COUNTDOWN_SECS);
        self.host.render_countdown(&countdown.text());
        self.countdown = Some(countdown);
        self.host.arm(SessionTimer::Countdown, Duration::from_millis(COUNTDOWN_TICK_MS));
    }

    fn tick_countdown(&mut self) {
        let Some(countdown) = self.countdown.as_mut() else {
            self.host.disarm(SessionTimer::Countdown);
            return;
        };
        match countdown.tick() {
            Some(tick) => {
                self.host.render_countdown(&tick.text);
                if tick.finished {
                    self.host.disarm(SessionTimer::Countdown);
                }
            }
            None => self.host.disarm(SessionTimer::Countdown),
        }
    }

    fn stop_countdown(&mut self) {
        self.host.disarm(SessionTimer::Countdown);
        self.countdown = None;
    }

    fn logout(&mut self) {
        if self.state == SessionState::LoggedOut {
            return;
        }
        // The logout timer has already fired; only the others are pending.
        self.host.disarm(SessionTimer::Warning);
        self.stop_countdown();
        self.state = SessionState::LoggedOut;
        log::info!("session expired, navigating to {}", self.logout_path);
        self.host.navigate(&self.logout_path);
    }
}
