//! Student registration form.
//!
//! Binds a `RegistrationState` controller to the DOM: field inputs, the
//! blocking invalid-character notice, the submit button, and the success
//! acknowledgment that precedes navigation to the dashboard.

#[cfg(all(test, feature = "ssr"))]
#[path = "registration_form_test.rs"]
mod registration_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_modal::{AlertModal, AlertTone};
use crate::components::form_field::{FileField, PasswordField, SelectField, TextField};
use crate::consts::SCHOOL_EMAIL_DOMAIN;
use crate::state::fields::{Course, EnrollmentStatus, Field, Gender, YearLevel, option_pairs};
use crate::state::registration::{FormPhase, RegistrationDraft, RegistrationState, SubmitOutcome};
use crate::util::focus::focus_element;

pub const ACKNOWLEDGMENT_TITLE: &str = "Registration successful";
pub const ACKNOWLEDGMENT_MESSAGE: &str = "Your account has been created. Continue to your dashboard.";
pub const ACKNOWLEDGMENT_CONFIRM: &str = "Continue";

/// Registration form.
///
/// `on_submit` receives each accepted draft before the acknowledgment dialog
/// is shown.
#[component]
pub fn RegistrationForm(#[prop(optional, into)] on_submit: Option<Callback<RegistrationDraft>>) -> impl IntoView {
    let form = RwSignal::new(RegistrationState::new());
    let navigate = use_navigate();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(RegistrationState::submit) {
            Some(SubmitOutcome::Blocked { first_invalid, .. }) => {
                focus_element(first_invalid.input_id());
            }
            Some(SubmitOutcome::Accepted(draft)) => {
                if let Some(handler) = on_submit {
                    handler.run(draft);
                }
            }
            Some(SubmitOutcome::Ignored) | None => {}
        }
    };

    // The navigate handle is not `Send`; callbacks hand the path to this effect.
    let destination = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(path) = destination.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_acknowledge = Callback::new(move |()| {
        if let Some(path) = form.try_update(RegistrationState::acknowledge).flatten() {
            destination.set(Some(path));
        }
    });
    let on_dismiss_notice = Callback::new(move |()| form.update(RegistrationState::dismiss_notice));

    let notice = move || form.with(RegistrationState::notice);
    let acknowledging = move || form.with(|f| f.phase() == FormPhase::Acknowledging);
    let submit_disabled = move || form.with(RegistrationState::is_submit_disabled);

    view! {
        <form class="registration-form" novalidate=true on:submit=on_form_submit>
            <fieldset class="registration-form__section">
                <legend>"Student Information"</legend>
                <TextField
                    form
                    field=Field::Edp
                    placeholder="1234-5678"
                    maxlength="9"
                    inputmode="numeric"
                />
                <div class="registration-form__row">
                    <TextField form field=Field::Firstname/>
                    <TextField form field=Field::Middlename/>
                    <TextField form field=Field::Lastname/>
                </div>
                <div class="registration-form__row">
                    <SelectField form field=Field::Course options={option_pairs::<Course>()}/>
                    <SelectField form field=Field::Year options={option_pairs::<YearLevel>()}/>
                    <SelectField form field=Field::Status options={option_pairs::<EnrollmentStatus>()}/>
                </div>
            </fieldset>

            <fieldset class="registration-form__section">
                <legend>"Personal Details"</legend>
                <div class="registration-form__row">
                    <SelectField form field=Field::Gender options={option_pairs::<Gender>()}/>
                    <TextField form field=Field::Age input_type="number"/>
                    <TextField form field=Field::Birthday input_type="date"/>
                </div>
                <TextField
                    form
                    field=Field::Contact
                    input_type="tel"
                    placeholder="09XXXXXXXXX"
                    maxlength="11"
                    inputmode="numeric"
                />
            </fieldset>

            <fieldset class="registration-form__section">
                <legend>"Account"</legend>
                <TextField
                    form
                    field=Field::Email
                    input_type="email"
                    placeholder={format!("firstname.lastname@{SCHOOL_EMAIL_DOMAIN}")}
                />
                <PasswordField form/>
                <FileField form/>
            </fieldset>

            <button class="registration-form__submit" type="submit" disabled=submit_disabled>
                {move || if submit_disabled() { "Submitting..." } else { "Register" }}
            </button>
        </form>

        {move || {
            notice()
                .map(|n| {
                    view! {
                        <AlertModal
                            tone=AlertTone::Warning
                            title=n.title
                            message=n.message
                            confirm_label="OK"
                            on_confirm=on_dismiss_notice
                        />
                    }
                })
        }}
        <Show when=acknowledging>
            <AlertModal
                tone=AlertTone::Success
                title=ACKNOWLEDGMENT_TITLE
                message=ACKNOWLEDGMENT_MESSAGE
                confirm_label=ACKNOWLEDGMENT_CONFIRM
                on_confirm=on_acknowledge
            />
        </Show>
    }
}
