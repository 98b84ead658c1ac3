//! Keystroke filters for the EDP and contact inputs.
//!
//! Disallowed characters are removed from the value in place instead of
//! rejecting the whole edit; `rejected` tells the caller to raise a notice.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Result of filtering one input event's raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sanitized {
    pub value: String,
    pub rejected: bool,
}

/// EDP numbers hold ASCII digits and dashes.
#[must_use]
pub fn edp(raw: &str) -> Sanitized {
    retain(raw, |c| c.is_ascii_digit() || c == '-')
}

/// Contact numbers hold ASCII digits only.
#[must_use]
pub fn contact(raw: &str) -> Sanitized {
    retain(raw, |c| c.is_ascii_digit())
}

fn retain(raw: &str, allowed: impl Fn(char) -> bool) -> Sanitized {
    let value = raw.chars().filter(|&c| allowed(c)).collect::<String>();
    let rejected = value.len() != raw.len();
    Sanitized { value, rejected }
}
