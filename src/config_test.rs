use super::*;

#[test]
fn defaults_match_portal_settings() {
    let cfg = PortalConfig::default();
    assert_eq!(cfg.session_timeout_minutes, 15);
    assert_eq!(cfg.logout_path, "/auth/logout");
    assert_eq!(cfg.alert_dismiss_delay(), Duration::from_millis(5000));
    assert_eq!(cfg.download_reset_delay(), Duration::from_millis(3000));
}

#[test]
fn warning_fires_two_minutes_before_logout() {
    let cfg = PortalConfig { session_timeout_minutes: 30, ..Default::default() };
    assert_eq!(cfg.warning_delay(), Duration::from_secs(28 * 60));
    assert_eq!(cfg.logout_delay(), Duration::from_secs(30 * 60));
}

#[test]
fn short_timeouts_warn_immediately() {
    let cfg = PortalConfig { session_timeout_minutes: 1, ..Default::default() };
    assert_eq!(cfg.warning_delay(), Duration::ZERO);
    assert_eq!(cfg.logout_delay(), Duration::from_secs(60));
}

#[test]
fn from_json_reads_all_fields() {
    let cfg = PortalConfig::from_json(
        r#"{"sessionTimeoutMinutes": 20, "logoutPath": "/bye", "alertDismissMs": 100, "downloadResetMs": 200}"#,
    )
    .unwrap();
    assert_eq!(
        cfg,
        PortalConfig {
            session_timeout_minutes: 20,
            logout_path: "/bye".to_owned(),
            alert_dismiss_ms: 100,
            download_reset_ms: 200,
        }
    );
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PortalConfig::from_json("{}").unwrap(), PortalConfig::default());
}

#[test]
fn from_json_invalid_timeout_falls_back() {
    for raw in [
        r#"{"sessionTimeoutMinutes": 0}"#,
        r#"{"sessionTimeoutMinutes": -5}"#,
        r#"{"sessionTimeoutMinutes": 2.5}"#,
        r#"{"sessionTimeoutMinutes": "soon"}"#,
        r#"{"sessionTimeoutMinutes": null}"#,
        r#"{"sessionTimeoutMinutes": [10]}"#,
    ] {
        let cfg = PortalConfig::from_json(raw).unwrap();
        assert_eq!(cfg.session_timeout_minutes, DEFAULT_SESSION_TIMEOUT_MINUTES, "input: {raw}");
    }
}

#[test]
fn from_json_accepts_numeric_string_timeout() {
    let cfg = PortalConfig::from_json(r#"{"sessionTimeoutMinutes": " 45 "}"#).unwrap();
    assert_eq!(cfg.session_timeout_minutes, 45);
}

#[test]
fn from_json_blank_logout_path_falls_back() {
    let cfg = PortalConfig::from_json(r#"{"logoutPath": "   "}"#).unwrap();
    assert_eq!(cfg.logout_path, DEFAULT_LOGOUT_PATH);
}

#[test]
fn from_json_rejects_malformed_text() {
    let err = PortalConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PortalError::ConfigParse(_)));
}

#[test]
fn timeout_override_only_applies_valid_values() {
    let cfg = PortalConfig::default().with_timeout_override(Some(60));
    assert_eq!(cfg.session_timeout_minutes, 60);
    let cfg = cfg.with_timeout_override(None);
    assert_eq!(cfg.session_timeout_minutes, 60);
}

#[test]
fn timeout_minutes_from_number_requires_positive_integer() {
    assert_eq!(timeout_minutes_from_number(15.0), Some(15));
    assert_eq!(timeout_minutes_from_number(0.0), None);
    assert_eq!(timeout_minutes_from_number(-3.0), None);
    assert_eq!(timeout_minutes_from_number(7.25), None);
    assert_eq!(timeout_minutes_from_number(f64::NAN), None);
    assert_eq!(timeout_minutes_from_number(f64::INFINITY), None);
}

#[test]
fn timeout_minutes_from_str_requires_positive_integer() {
    assert_eq!(timeout_minutes_from_str("10"), Some(10));
    assert_eq!(timeout_minutes_from_str("0"), None);
    assert_eq!(timeout_minutes_from_str("-1"), None);
    assert_eq!(timeout_minutes_from_str("abc"), None);
    assert_eq!(timeout_minutes_from_str("+5"), None);
    assert_eq!(timeout_minutes_from_str("1 0"), None);
    assert_eq!(timeout_minutes_from_str(""), None);
}

#[test]
fn timer_millis_clamps_to_browser_limit() {
    assert_eq!(timer_millis(Duration::from_millis(3000)), 3000);
    assert_eq!(timer_millis(Duration::from_secs(60 * 60 * 24 * 365)), MAX_TIMER_MS);
}
