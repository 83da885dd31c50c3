//! Password strength scoring and the portal's password policy.
//!
//! The meter is advisory: five independent predicates each add one point.
//! The policy check mirrors the rules the server enforces on reset and
//! activation so the form can explain a rejection before submitting.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum length for both the length point and the policy.
pub const MIN_PASSWORD_LEN: usize = 12;

/// Symbols the server policy accepts as "special characters".
pub const POLICY_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score `password` from 0 to 5.
///
/// One point each for: at least 12 UTF-16 code units (the length the page
/// reports for an input value), an ASCII lowercase letter,
/// an ASCII uppercase letter, an ASCII digit, and any other character.
#[must_use]
pub fn score(password: &str) -> u8 {
    let predicates = [
        password.encode_utf16().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    predicates.into_iter().map(u8::from).sum()
}

/// Strength rating shown in the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    /// Empty input; no rating is shown.
    Unrated,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Rating for a score. Scores above 5 saturate at [`Strength::Strong`].
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Unrated,
            1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn of(password: &str) -> Self {
        Self::from_score(score(password))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unrated => "",
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Contextual color name, if the rating has one.
    #[must_use]
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Unrated => None,
            Self::VeryWeak => Some("danger"),
            Self::Weak => Some("warning"),
            Self::Fair => Some("info"),
            Self::Good => Some("primary"),
            Self::Strong => Some("success"),
        }
    }

    /// Full class attribute for the badge element.
    #[must_use]
    pub fn badge_class(self) -> String {
        match self.color() {
            Some(color) => format!("badge bg-{color}"),
            None => "badge".to_owned(),
        }
    }
}

/// A server-side password rule that a candidate does not meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("Password must be at least 12 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
    #[error("Password must contain at least one special character (!@#$%^&*(),.?\":{{}}|<>)")]
    MissingSpecial,
}

/// Check `password` against the server policy, reporting the first rule it
/// fails in the order the server checks them.
pub fn check_policy(password: &str) -> Result<(), PolicyViolation> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PolicyViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| POLICY_SPECIAL_CHARS.contains(c)) {
        return Err(PolicyViolation::MissingSpecial);
    }
    Ok(())
}

/// Text for the policy hint element; empty once the policy is met.
#[must_use]
pub fn policy_hint(password: &str) -> String {
    match check_policy(password) {
        Ok(()) => String::new(),
        Err(violation) => violation.to_string(),
    }
}
