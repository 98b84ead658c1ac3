//! Per-field validators for the registration form.
//!
//! Each validator is a pure function from the field's current text to
//! `Ok` or a `FieldValidationError` carrying the message shown under the
//! input. Typed parsers (`parse_age`, `parse_birthday`, `parse_option`) share
//! the same error type so a valid form can be converted without re-checking.
//!
//! Patterns use ASCII classes (`[0-9]`, `[a-z]`) rather than `\d`/`\w`, which
//! are Unicode-aware in the `regex` crate.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use time::Date;
use time::macros::format_description;

use crate::consts::SCHOOL_EMAIL_DOMAIN;
use crate::state::fields::{Course, EnrollmentStatus, Field, FieldOption, Gender, YearLevel};

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

static EDP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{4}$").expect("valid EDP pattern"));
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("valid contact pattern"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^[a-z]+\.[a-z]+@{}$", regex::escape(SCHOOL_EMAIL_DOMAIN));
    Regex::new(&pattern).expect("valid email pattern")
});

/// A failed validator: which field, and what to tell the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldValidationError {
    #[must_use]
    pub fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub type Validation = Result<(), FieldValidationError>;

/// Run the validator registered for `field`.
///
/// # Errors
///
/// Returns the field's error when `value` fails its rule.
pub fn validate(field: Field, value: &str) -> Validation {
    match field {
        Field::Edp => validate_edp(value),
        Field::Firstname | Field::Middlename | Field::Lastname => validate_name(field, value),
        Field::Course => parse_option::<Course>(field, value).map(drop),
        Field::Year => parse_option::<YearLevel>(field, value).map(drop),
        Field::Status => parse_option::<EnrollmentStatus>(field, value).map(drop),
        Field::Gender => parse_option::<Gender>(field, value).map(drop),
        Field::Age => parse_age(value).map(drop),
        Field::Birthday => parse_birthday(value).map(drop),
        Field::Contact => validate_contact(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
        Field::ProfilePicture => validate_profile_picture(value),
    }
}

/// # Errors
///
/// Empty, or not `NNNN-NNNN`.
pub fn validate_edp(value: &str) -> Validation {
    require(Field::Edp, value, "EDP number is required.")?;
    if EDP_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldValidationError::new(Field::Edp, "EDP number must follow the format 1234-5678."))
    }
}

/// # Errors
///
/// Blank name.
pub fn validate_name(field: Field, value: &str) -> Validation {
    let message = match field {
        Field::Middlename => "Middle name is required.",
        Field::Lastname => "Last name is required.",
        _ => "First name is required.",
    };
    require(field, value, message)
}

/// # Errors
///
/// Empty, or not `09` followed by nine digits.
pub fn validate_contact(value: &str) -> Validation {
    require(Field::Contact, value, "Contact number is required.")?;
    if CONTACT_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldValidationError::new(
            Field::Contact,
            "Contact number must start with 09 and have 11 digits.",
        ))
    }
}

/// # Errors
///
/// Empty, or not `first.last@sccpag.edu.ph` in lowercase.
pub fn validate_email(value: &str) -> Validation {
    require(Field::Email, value, "School email is required.")?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldValidationError::new(
            Field::Email,
            "Use your school email: firstname.lastname@sccpag.edu.ph.",
        ))
    }
}

/// Strength policy: at least `PASSWORD_MIN_LEN` characters with a lowercase
/// letter, an uppercase letter, a digit, and a non-word character.
///
/// # Errors
///
/// Empty, or any policy clause unmet.
pub fn validate_password(value: &str) -> Validation {
    if value.is_empty() {
        return Err(FieldValidationError::new(Field::Password, "Password is required."));
    }
    if password_is_strong(value) {
        Ok(())
    } else {
        Err(FieldValidationError::new(
            Field::Password,
            "Password needs 8+ characters with upper and lower case letters, a number, and a special character.",
        ))
    }
}

#[must_use]
pub fn password_is_strong(value: &str) -> bool {
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'));
    has_lower && has_upper && has_digit && has_special && value.chars().count() >= PASSWORD_MIN_LEN
}

/// Presence only; the file's type and size are not inspected.
///
/// # Errors
///
/// No file selected.
pub fn validate_profile_picture(value: &str) -> Validation {
    require(Field::ProfilePicture, value, "Profile picture is required.")
}

/// # Errors
///
/// Empty, not a whole number, below 1, or too large to store.
pub fn parse_age(value: &str) -> Result<u32, FieldValidationError> {
    require(Field::Age, value, "Age is required.")?;
    let too_small = || FieldValidationError::new(Field::Age, "Age must be at least 1.");
    let too_large = || FieldValidationError::new(Field::Age, "Age is out of range.");
    let age = value.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => too_large(),
        IntErrorKind::NegOverflow => too_small(),
        _ => FieldValidationError::new(Field::Age, "Age must be a number."),
    })?;
    if age < 1 {
        return Err(too_small());
    }
    u32::try_from(age).map_err(|_| too_large())
}

/// Parse the `YYYY-MM-DD` value produced by `<input type="date">`.
///
/// # Errors
///
/// Empty, or not a real calendar date.
pub fn parse_birthday(value: &str) -> Result<Date, FieldValidationError> {
    require(Field::Birthday, value, "Birthday is required.")?;
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| FieldValidationError::new(Field::Birthday, "Enter a valid birthday."))
}

/// # Errors
///
/// Nothing selected, or a value outside the option set.
pub fn parse_option<T: FieldOption>(field: Field, value: &str) -> Result<T, FieldValidationError> {
    require(field, value, select_message(field))?;
    T::parse(value).ok_or_else(|| FieldValidationError::new(field, select_message(field)))
}

fn select_message(field: Field) -> &'static str {
    match field {
        Field::Course => "Select a valid course.",
        Field::Year => "Select a valid year level.",
        Field::Status => "Select a valid status.",
        _ => "Select a valid gender.",
    }
}

fn require(field: Field, value: &str, message: &'static str) -> Validation {
    if value.trim().is_empty() {
        Err(FieldValidationError::new(field, message))
    } else {
        Ok(())
    }
}
