//! Portal configuration resolved once at page load.
//!
//! Values come from an optional JSON block embedded in the page, with the
//! `sessionTimeoutMinutes` page global taking precedence for the timeout.
//! Anything missing or invalid falls back to the defaults below.

use std::time::Duration;

use serde::Deserialize;

use crate::consts::MAX_TIMER_MS;
use crate::error::PortalError;

pub const DEFAULT_SESSION_TIMEOUT_MINUTES: u32 = 15;
pub const WARNING_LEAD_MINUTES: u32 = 2;
pub const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5000;
pub const DEFAULT_DOWNLOAD_RESET_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub session_timeout_minutes: u32,
    pub logout_path: String,
    pub alert_dismiss_ms: u32,
    pub download_reset_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            session_timeout_minutes: DEFAULT_SESSION_TIMEOUT_MINUTES,
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            download_reset_ms: DEFAULT_DOWNLOAD_RESET_MS,
        }
    }
}

/// Wire shape of the JSON block. The timeout is kept loose so that strings
/// and non-integers resolve to the default instead of failing the parse.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPortalConfig {
    session_timeout_minutes: Option<serde_json::Value>,
    logout_path: Option<String>,
    alert_dismiss_ms: Option<u32>,
    download_reset_ms: Option<u32>,
}

impl PortalConfig {
    /// Parse the JSON configuration block.
    ///
    /// Returns an error only when the text is not a JSON object of the
    /// expected shape; individual invalid values resolve to defaults.
    pub fn from_json(raw: &str) -> Result<Self, PortalError> {
        let parsed: RawPortalConfig =
            serde_json::from_str(raw).map_err(|err| PortalError::ConfigParse(err.to_string()))?;

        let defaults = Self::default();
        let session_timeout_minutes = parsed
            .session_timeout_minutes
            .as_ref()
            .and_then(timeout_minutes_from_json)
            .unwrap_or(defaults.session_timeout_minutes);
        let logout_path = parsed
            .logout_path
            .map(|path| path.trim().to_owned())
            .filter(|path| !path.is_empty())
            .unwrap_or(defaults.logout_path);

        Ok(Self {
            session_timeout_minutes,
            logout_path,
            alert_dismiss_ms: parsed.alert_dismiss_ms.unwrap_or(defaults.alert_dismiss_ms),
            download_reset_ms: parsed.download_reset_ms.unwrap_or(defaults.download_reset_ms),
        })
    }

    /// Replace the timeout when `minutes` is a valid value.
    #[must_use]
    pub fn with_timeout_override(mut self, minutes: Option<u32>) -> Self {
        if let Some(minutes) = minutes {
            self.session_timeout_minutes = minutes;
        }
        self
    }

    /// Delay from the last reset until the expiry warning is shown.
    ///
    /// Timeouts shorter than the warning window warn immediately.
    #[must_use]
    pub fn warning_delay(&self) -> Duration {
        minutes(self.session_timeout_minutes.saturating_sub(WARNING_LEAD_MINUTES))
    }

    /// Delay from the last reset until the session is logged out.
    #[must_use]
    pub fn logout_delay(&self) -> Duration {
        minutes(self.session_timeout_minutes)
    }

    #[must_use]
    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.alert_dismiss_ms))
    }

    #[must_use]
    pub fn download_reset_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.download_reset_ms))
    }
}

fn minutes(count: u32) -> Duration {
    Duration::from_secs(u64::from(count) * 60)
}

/// Accept a positive whole number of minutes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn timeout_minutes_from_number(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 1.0 || value.fract() > 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    // Range and integrality checked above.
    Some(value as u32)
}

/// Accept a positive whole number of minutes written as plain decimal
/// digits, optionally padded with whitespace. Signs are rejected.
#[must_use]
pub fn timeout_minutes_from_str(raw: &str) -> Option<u32> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match digits.parse::<u32>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}

fn timeout_minutes_from_json(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().and_then(timeout_minutes_from_number),
        serde_json::Value::String(s) => timeout_minutes_from_str(s),
        _ => None,
    }
}

/// Convert a delay to browser timer milliseconds, clamped to what
/// `setTimeout` honors.
#[must_use]
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMER_MS, |ms| ms.min(MAX_TIMER_MS))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
