//! Busy state for download buttons.
//!
//! A click swaps the button label for a spinner and disables it. The button
//! is restored by [`DownloadBusy::complete`], called either when the download
//! reports completion or by the fallback timer, whichever comes first.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Markup shown while a download is being prepared.
pub const BUSY_LABEL_HTML: &str =
    "<span class=\"spinner-border spinner-border-sm\" role=\"status\" aria-hidden=\"true\"></span> Preparing...";

/// A control whose label and enabled state can be swapped.
pub trait BusyControl {
    fn label_html(&self) -> String;
    fn set_label_html(&mut self, html: &str);
    fn set_disabled(&mut self, disabled: bool);
}

/// Saved label of a control while it is busy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadBusy {
    original_label: Option<String>,
}

impl DownloadBusy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.original_label.is_some()
    }

    /// Enter the busy state. Returns `false` without touching the control if
    /// it is already busy, so the saved label is never overwritten.
    pub fn begin<C: BusyControl>(&mut self, control: &mut C) -> bool {
        if self.is_busy() {
            return false;
        }
        self.original_label = Some(control.label_html());
        control.set_label_html(BUSY_LABEL_HTML);
        control.set_disabled(true);
        true
    }

    /// Restore the saved label and re-enable the control. Returns `false` if
    /// the control was not busy.
    pub fn complete<C: BusyControl>(&mut self, control: &mut C) -> bool {
        let Some(label) = self.original_label.take() else {
            return false;
        };
        control.set_label_html(&label);
        control.set_disabled(false);
        true
    }
}
