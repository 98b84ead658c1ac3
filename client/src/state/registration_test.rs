use super::*;

fn valid_value(field: Field) -> &'static str {
    match field {
        Field::Edp => "2021-0457",
        Field::Firstname => "Maria",
        Field::Middlename => "Santos",
        Field::Lastname => "Reyes",
        Field::Course => "BSIS",
        Field::Year => "2nd Year",
        Field::Status => "Regular Student",
        Field::Gender => "Female",
        Field::Age => "19",
        Field::Birthday => "2005-06-14",
        Field::Contact => "09171234567",
        Field::Email => "maria.reyes@sccpag.edu.ph",
        Field::Password => "Abcdef1!",
        Field::ProfilePicture => "avatar.png",
    }
}

fn filled_form() -> RegistrationState {
    let mut form = RegistrationState::new();
    for field in Field::ALL {
        form.input(field, valid_value(field));
    }
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_empty_idle_and_masked() {
    let form = RegistrationState::new();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(!form.password_visible());
    assert_eq!(form.notice(), None);
    assert_eq!(form.submit_attempts(), 0);
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
        assert_eq!(form.error(field), None);
        assert!(!form.is_touched(field));
    }
}

// =============================================================
// Input
// =============================================================

#[test]
fn input_stores_value_and_marks_touched() {
    let mut form = RegistrationState::new();
    assert_eq!(form.input(Field::Firstname, "Maria"), None);
    assert_eq!(form.value(Field::Firstname), "Maria");
    assert!(form.is_touched(Field::Firstname));
    assert_eq!(form.error(Field::Firstname), None);
}

#[test]
fn input_validates_on_change() {
    let mut form = RegistrationState::new();
    form.input(Field::Email, "Maria.Reyes@gmail.com");
    let err = form.error(Field::Email).expect("invalid email flagged on change");
    assert_eq!(err.field, Field::Email);

    form.input(Field::Email, "maria.reyes@sccpag.edu.ph");
    assert_eq!(form.error(Field::Email), None);
}

#[test]
fn edp_disallowed_character_raises_notice_and_is_removed() {
    let mut form = RegistrationState::new();
    form.input(Field::Edp, "2021");
    let notice = form.input(Field::Edp, "2021x");
    assert_eq!(notice, Some(EDP_CHARACTER_NOTICE));
    assert_eq!(form.notice(), Some(EDP_CHARACTER_NOTICE));
    assert_eq!(form.value(Field::Edp), "2021");
    assert!(!form.value(Field::Edp).contains('x'));
}

#[test]
fn contact_disallowed_character_raises_notice_and_is_removed() {
    let mut form = RegistrationState::new();
    let notice = form.input(Field::Contact, "0917-");
    assert_eq!(notice, Some(CONTACT_CHARACTER_NOTICE));
    assert_eq!(form.value(Field::Contact), "0917");
}

#[test]
fn clean_input_keeps_pending_notice_until_dismissed() {
    let mut form = RegistrationState::new();
    form.input(Field::Edp, "a");
    assert_eq!(form.input(Field::Edp, "1"), None);
    assert_eq!(form.notice(), Some(EDP_CHARACTER_NOTICE));

    form.dismiss_notice();
    assert_eq!(form.notice(), None);
}

#[test]
fn other_fields_never_raise_notices() {
    let mut form = RegistrationState::new();
    assert_eq!(form.input(Field::Firstname, "M4ria!"), None);
    assert_eq!(form.value(Field::Firstname), "M4ria!");
}

#[test]
fn select_file_strips_fake_path() {
    let mut form = RegistrationState::new();
    form.select_file(r"C:\fakepath\avatar.png");
    assert_eq!(form.value(Field::ProfilePicture), "avatar.png");
    assert_eq!(form.error(Field::ProfilePicture), None);
}

#[test]
fn select_file_cleared_reports_required() {
    let mut form = RegistrationState::new();
    form.select_file("avatar.png");
    form.select_file("");
    assert_eq!(
        form.error(Field::ProfilePicture).map(|err| err.message),
        Some("Profile picture is required.")
    );
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_valid_form_is_accepted_and_opens_acknowledgment() {
    let mut form = filled_form();
    let outcome = form.submit();
    let SubmitOutcome::Accepted(draft) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert_eq!(draft.edp, "2021-0457");
    assert_eq!(draft.course, Course::Bsis);
    assert_eq!(draft.year, YearLevel::Second);
    assert_eq!(draft.status, EnrollmentStatus::Regular);
    assert_eq!(draft.gender, Gender::Female);
    assert_eq!(draft.age, 19);
    assert_eq!(draft.birthday.year(), 2005);
    assert_eq!(draft.profile_picture, "avatar.png");
    assert_eq!(form.phase(), FormPhase::Acknowledging);
    assert!(form.is_submit_disabled());
}

#[test]
fn submit_draft_matches_direct_conversion() {
    let mut form = filled_form();
    let SubmitOutcome::Accepted(draft) = form.submit() else {
        panic!("filled form must be accepted");
    };
    assert_eq!(RegistrationDraft::from_values(valid_value), Ok(draft));
}

#[test]
fn submit_while_acknowledging_is_ignored_without_revalidating() {
    let mut form = filled_form();
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    assert_eq!(form.submit_attempts(), 1);

    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(form.submit_attempts(), 1);
    assert_eq!(form.phase(), FormPhase::Acknowledging);
}

#[test]
fn submit_with_one_empty_field_blocks_with_exactly_one_error() {
    for missing in Field::ALL {
        let mut form = filled_form();
        form.input(missing, "");
        let outcome = form.submit();
        let SubmitOutcome::Blocked { first_invalid, errors } = outcome else {
            panic!("expected block for {missing:?}, got {outcome:?}");
        };
        assert_eq!(first_invalid, missing);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, missing);
        assert_eq!(form.phase(), FormPhase::Blocked { first_invalid: missing });
        let shown = Field::ALL.iter().filter(|&&f| form.error(f).is_some()).count();
        assert_eq!(shown, 1, "{missing:?}");
    }
}

#[test]
fn submit_empty_form_reports_every_field_and_focuses_first() {
    let mut form = RegistrationState::new();
    let SubmitOutcome::Blocked { first_invalid, errors } = form.submit() else {
        panic!("empty form must block");
    };
    assert_eq!(first_invalid, Field::Edp);
    assert_eq!(errors.len(), Field::ALL.len());
    assert!(Field::ALL.iter().all(|&f| form.is_touched(f)));
}

#[test]
fn blocked_first_invalid_follows_document_order() {
    let mut form = filled_form();
    form.input(Field::Password, "weak");
    form.input(Field::Contact, "0917");
    let SubmitOutcome::Blocked { first_invalid, errors } = form.submit() else {
        panic!("invalid form must block");
    };
    assert_eq!(first_invalid, Field::Contact);
    assert_eq!(errors.iter().map(|e| e.field).collect::<Vec<_>>(), vec![Field::Contact, Field::Password]);
}

#[test]
fn blocked_returns_to_idle_on_next_edit() {
    let mut form = RegistrationState::new();
    form.submit();
    assert!(matches!(form.phase(), FormPhase::Blocked { .. }));
    form.input(Field::Edp, "2");
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn blocked_submit_can_be_retried_after_correction() {
    let mut form = filled_form();
    form.input(Field::Age, "0");
    assert!(matches!(form.submit(), SubmitOutcome::Blocked { first_invalid: Field::Age, .. }));
    form.input(Field::Age, "18");
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    assert_eq!(form.submit_attempts(), 2);
}

// =============================================================
// Acknowledge
// =============================================================

#[test]
fn acknowledge_navigates_to_dashboard_and_clears_form() {
    let mut form = filled_form();
    form.toggle_password_visibility();
    form.submit();
    assert_eq!(form.acknowledge(), Some(DASHBOARD_PATH));
    assert_eq!(form.phase(), FormPhase::NavigatedAway);
    assert!(Field::ALL.iter().all(|&f| form.value(f).is_empty()));
    assert!(!form.password_visible());
}

#[test]
fn acknowledge_only_fires_once() {
    let mut form = filled_form();
    form.submit();
    assert_eq!(form.acknowledge(), Some(DASHBOARD_PATH));
    assert_eq!(form.acknowledge(), None);
}

#[test]
fn acknowledge_without_open_dialog_is_noop() {
    let mut form = RegistrationState::new();
    assert_eq!(form.acknowledge(), None);
    form.submit();
    assert_eq!(form.acknowledge(), None);
    assert!(matches!(form.phase(), FormPhase::Blocked { .. }));
}

#[test]
fn input_is_ignored_while_acknowledging() {
    let mut form = filled_form();
    form.submit();
    form.input(Field::Firstname, "Other");
    assert_eq!(form.value(Field::Firstname), "Maria");
}

// =============================================================
// Password visibility
// =============================================================

#[test]
fn toggling_password_visibility_keeps_value() {
    let mut form = RegistrationState::new();
    form.input(Field::Password, "Abcdef1!");
    assert!(form.toggle_password_visibility());
    assert_eq!(form.value(Field::Password), "Abcdef1!");
    assert!(!form.toggle_password_visibility());
    assert_eq!(form.value(Field::Password), "Abcdef1!");
}

// =============================================================
// Draft conversion
// =============================================================

#[test]
fn draft_from_values_trims_names() {
    let draft = RegistrationDraft::from_values(|field| match field {
        Field::Firstname => "  Maria ",
        other => valid_value(other),
    })
    .expect("valid values convert");
    assert_eq!(draft.firstname, "Maria");
}

#[test]
fn draft_from_values_collects_all_errors_in_order() {
    let errors = RegistrationDraft::from_values(|field| match field {
        Field::Age | Field::Email => "",
        other => valid_value(other),
    })
    .expect_err("missing fields");
    assert_eq!(errors.iter().map(|e| e.field).collect::<Vec<_>>(), vec![Field::Age, Field::Email]);
}
