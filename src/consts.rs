//! DOM contract and fixed timings shared across the portal behaviors.

// ── Session timeout ─────────────────────────────────────────────

/// Id of the session-expiry warning dialog container.
pub const SESSION_WARNING_MODAL_ID: &str = "sessionWarningModal";

/// Id of the text node that shows the remaining time inside the dialog.
pub const TIME_REMAINING_ID: &str = "timeRemaining";

/// Id of the "stay logged in" button inside the dialog.
pub const STAY_LOGGED_IN_ID: &str = "stayLoggedIn";

/// Length of the warning window in seconds (the countdown start value).
pub const WARNING_COUNTDOWN_SECS: u32 = 120;

/// Countdown tick interval in milliseconds.
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Largest delay a browser timer honors; longer delays fire immediately.
pub const MAX_TIMER_MS: u32 = 2_147_483_647;

// ── Alerts and tooltips ─────────────────────────────────────────

/// Alerts that close themselves after the dismiss delay.
pub const AUTO_DISMISS_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

/// Elements that host a tooltip.
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";

// ── Controls ────────────────────────────────────────────────────

/// Controls that require confirmation before a destructive action.
pub const CONFIRM_DELETE_SELECTOR: &str = "[data-confirm-delete]";

/// Buttons that show a busy state while a download is prepared.
pub const DOWNLOAD_BUTTON_SELECTOR: &str = ".download-btn";

/// Forms gated on built-in constraint validation.
pub const NEEDS_VALIDATION_SELECTOR: &str = ".needs-validation";

/// Marker class added to a form once a submission has been attempted.
pub const WAS_VALIDATED_CLASS: &str = "was-validated";

// ── Password meter ──────────────────────────────────────────────

/// Id of the password input being scored.
pub const PASSWORD_INPUT_ID: &str = "password";

/// Id of the strength badge.
pub const PASSWORD_STRENGTH_ID: &str = "passwordStrength";

/// Id of the optional policy hint element.
pub const PASSWORD_HINT_ID: &str = "passwordHint";

// ── File table ──────────────────────────────────────────────────

/// Id of the free-text file search input.
pub const FILE_SEARCH_ID: &str = "fileSearch";

/// Id of the category select.
pub const CATEGORY_FILTER_ID: &str = "categoryFilter";

/// Rows of the file table.
pub const FILE_ROW_SELECTOR: &str = ".file-row";

// ── Configuration ───────────────────────────────────────────────

/// Id of the optional JSON configuration block.
pub const PORTAL_CONFIG_ID: &str = "portalConfig";

/// Page global carrying the session timeout in minutes.
pub const SESSION_TIMEOUT_GLOBAL: &str = "sessionTimeoutMinutes";
