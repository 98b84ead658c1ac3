//! Registration form controller.
//!
//! DESIGN
//! ======
//! The form keeps one `FieldState` per `Field` and drives a small per-attempt
//! state machine:
//!
//! `Idle -> {Blocked | Submitting -> Acknowledging -> NavigatedAway}`
//!
//! Validation on submit is synchronous, so there is no observable
//! "validating" phase. `Blocked` falls back to `Idle` on the next edit.
//! Nothing here touches the DOM; components hold the controller in an
//! `RwSignal` and render from its accessors.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::BTreeMap;

use time::Date;

use crate::consts::DASHBOARD_PATH;
use crate::state::fields::{Course, EnrollmentStatus, Field, Gender, YearLevel};
use crate::util::sanitize;
use crate::util::validate::{self, FieldValidationError};

/// Live state of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldValidationError>,
    pub touched: bool,
}

/// Blocking pop-up raised from an input handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

pub const EDP_CHARACTER_NOTICE: Notice = Notice {
    title: "Invalid character",
    message: "EDP number accepts digits and a dash only.",
};

pub const CONTACT_CHARACTER_NOTICE: Notice = Notice {
    title: "Invalid character",
    message: "Contact number accepts digits only.",
};

/// Where the current submission attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// At least one field failed; `first_invalid` is the earliest in document order.
    Blocked { first_invalid: Field },
    Submitting,
    /// The success dialog is open and awaiting confirmation.
    Acknowledging,
    NavigatedAway,
}

/// What a call to `RegistrationState::submit` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submission is still in flight.
    Ignored,
    Blocked { first_invalid: Field, errors: Vec<FieldValidationError> },
    Accepted(RegistrationDraft),
}

/// A fully validated registration, ready for a submission handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub edp: String,
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
    pub course: Course,
    pub year: YearLevel,
    pub status: EnrollmentStatus,
    pub gender: Gender,
    pub age: u32,
    pub birthday: Date,
    pub contact: String,
    pub email: String,
    pub password: String,
    pub profile_picture: String,
}

impl RegistrationDraft {
    /// Convert field values into a typed draft.
    ///
    /// # Errors
    ///
    /// Returns every failing field, in document order.
    pub fn from_values<'a>(value: impl Fn(Field) -> &'a str) -> Result<Self, Vec<FieldValidationError>> {
        let errors = Field::ALL
            .iter()
            .filter_map(|&field| validate::validate(field, value(field)).err())
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            return Err(errors);
        }
        Self::convert(&value).map_err(|err| vec![err])
    }

    fn convert<'a>(value: &impl Fn(Field) -> &'a str) -> Result<Self, FieldValidationError> {
        Ok(Self {
            edp: value(Field::Edp).to_owned(),
            firstname: value(Field::Firstname).trim().to_owned(),
            middlename: value(Field::Middlename).trim().to_owned(),
            lastname: value(Field::Lastname).trim().to_owned(),
            course: validate::parse_option(Field::Course, value(Field::Course))?,
            year: validate::parse_option(Field::Year, value(Field::Year))?,
            status: validate::parse_option(Field::Status, value(Field::Status))?,
            gender: validate::parse_option(Field::Gender, value(Field::Gender))?,
            age: validate::parse_age(value(Field::Age))?,
            birthday: validate::parse_birthday(value(Field::Birthday))?,
            contact: value(Field::Contact).to_owned(),
            email: value(Field::Email).to_owned(),
            password: value(Field::Password).to_owned(),
            profile_picture: value(Field::ProfilePicture).to_owned(),
        })
    }
}

/// Form-state controller for one registration session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationState {
    fields: BTreeMap<Field, FieldState>,
    phase: FormPhase,
    password_visible: bool,
    notice: Option<Notice>,
    submit_attempts: u32,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Field::ALL.iter().map(|&field| (field, FieldState::default())).collect(),
            phase: FormPhase::Idle,
            password_visible: false,
            notice: None,
            submit_attempts: 0,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map_or("", |state| state.value.as_str())
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldValidationError> {
        self.fields.get(&field).and_then(|state| state.error.as_ref())
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.fields.get(&field).is_some_and(|state| state.touched)
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Number of submits that actually ran validation.
    #[must_use]
    pub fn submit_attempts(&self) -> u32 {
        self.submit_attempts
    }

    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting | FormPhase::Acknowledging)
    }

    /// Apply one input event.
    ///
    /// EDP and contact values are filtered first; when a character was
    /// dropped the corrected value is stored and a notice is returned (and
    /// kept until dismissed). The field is then validated on change.
    pub fn input(&mut self, field: Field, raw: &str) -> Option<Notice> {
        if self.is_submit_disabled() {
            return None;
        }
        let (value, notice) = match field {
            Field::Edp => Self::filter(sanitize::edp(raw), EDP_CHARACTER_NOTICE),
            Field::Contact => Self::filter(sanitize::contact(raw), CONTACT_CHARACTER_NOTICE),
            _ => (raw.to_owned(), None),
        };
        if notice.is_some() {
            self.notice = notice;
        }
        self.set_value(field, value);
        if matches!(self.phase, FormPhase::Blocked { .. } | FormPhase::NavigatedAway) {
            self.phase = FormPhase::Idle;
        }
        notice
    }

    /// Store the file chosen in the profile picture input.
    ///
    /// `raw` is the file input's value; browsers prefix it with a fake path
    /// (`C:\fakepath\`), which is dropped.
    pub fn select_file(&mut self, raw: &str) {
        let name = raw.rsplit(['\\', '/']).next().unwrap_or_default().trim().to_owned();
        self.input(Field::ProfilePicture, &name);
    }

    /// Re-run one field's validator and record its result.
    pub fn validate_field(&mut self, field: Field) -> Option<FieldValidationError> {
        let result = validate::validate(field, self.value(field)).err();
        if let Some(state) = self.fields.get_mut(&field) {
            state.error.clone_from(&result);
        }
        result
    }

    /// Validate every field and, when all pass, hand back the typed draft
    /// and open the acknowledgment dialog.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submit_disabled() {
            return SubmitOutcome::Ignored;
        }
        self.submit_attempts += 1;

        for state in self.fields.values_mut() {
            state.touched = true;
        }
        let errors = Field::ALL
            .iter()
            .filter_map(|&field| self.validate_field(field))
            .collect::<Vec<_>>();
        if let Some(first) = errors.first() {
            return self.block(first.field, errors);
        }

        self.phase = FormPhase::Submitting;
        let converted = RegistrationDraft::convert(&|field| self.value(field));
        match converted {
            Ok(draft) => {
                self.phase = FormPhase::Acknowledging;
                SubmitOutcome::Accepted(draft)
            }
            Err(err) => self.block(err.field, vec![err]),
        }
    }

    /// Confirm the success dialog. Clears the form and returns the route to
    /// navigate to; does nothing unless the dialog is open.
    pub fn acknowledge(&mut self) -> Option<&'static str> {
        if self.phase != FormPhase::Acknowledging {
            return None;
        }
        let attempts = self.submit_attempts;
        *self = Self::new();
        self.submit_attempts = attempts;
        self.phase = FormPhase::NavigatedAway;
        Some(DASHBOARD_PATH)
    }

    /// Flip masked/plain rendering of the password input.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn filter(result: sanitize::Sanitized, notice: Notice) -> (String, Option<Notice>) {
        let notice = result.rejected.then_some(notice);
        (result.value, notice)
    }

    fn set_value(&mut self, field: Field, value: String) {
        let error = validate::validate(field, &value).err();
        let state = self.fields.entry(field).or_default();
        state.value = value;
        state.touched = true;
        state.error = error;
    }

    fn block(&mut self, first_invalid: Field, errors: Vec<FieldValidationError>) -> SubmitOutcome {
        for err in &errors {
            if let Some(state) = self.fields.get_mut(&err.field) {
                state.error = Some(err.clone());
            }
        }
        self.phase = FormPhase::Blocked { first_invalid };
        SubmitOutcome::Blocked { first_invalid, errors }
    }
}
