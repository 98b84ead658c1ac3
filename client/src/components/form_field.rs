//! Labeled registration inputs bound to a `RegistrationState` signal.
//!
//! Every input writes through `RegistrationState::input` (or `select_file`),
//! so sanitizing and on-change validation happen in one place. Error text is
//! rendered inline beneath the control.

use leptos::prelude::*;

use crate::state::fields::Field;
use crate::state::registration::RegistrationState;

fn field_is_invalid(form: RwSignal<RegistrationState>, field: Field) -> bool {
    form.with(|f| f.error(field).is_some())
}

fn write_input(form: RwSignal<RegistrationState>, field: Field, raw: &str) {
    form.update(|f| {
        f.input(field, raw);
    });
}

/// Inline validation message for one field; renders nothing while valid.
#[component]
pub fn FieldError(form: RwSignal<RegistrationState>, field: Field) -> impl IntoView {
    let message = move || form.with(|f| f.error(field).map(|err| err.message));

    view! {
        <Show when=move || message().is_some()>
            <p class="form-field__error" role="alert">
                {move || message().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Single-line text-like input (`text`, `number`, `date`, `email`, `tel`).
#[component]
pub fn TextField(
    form: RwSignal<RegistrationState>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] maxlength: Option<&'static str>,
    #[prop(optional)] inputmode: Option<&'static str>,
) -> impl IntoView {
    let invalid = move || field_is_invalid(form, field);

    view! {
        <div class="form-field" class:form-field--invalid=invalid>
            <label class="form-field__label" for=field.input_id()>{field.label()}</label>
            <input
                class="form-field__input"
                id=field.input_id()
                name=field.name()
                type=input_type
                placeholder=placeholder
                maxlength=maxlength
                inputmode=inputmode
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| write_input(form, field, &event_target_value(&ev))
            />
            <FieldError form field/>
        </div>
    }
}

/// Dropdown over a fixed option set; the placeholder option has an empty value.
#[component]
pub fn SelectField(
    form: RwSignal<RegistrationState>,
    field: Field,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let invalid = move || field_is_invalid(form, field);

    view! {
        <div class="form-field" class:form-field--invalid=invalid>
            <label class="form-field__label" for=field.input_id()>{field.label()}</label>
            <select
                class="form-field__input form-field__select"
                id=field.input_id()
                name=field.name()
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:change=move |ev| write_input(form, field, &event_target_value(&ev))
            >
                <option value="" disabled=true>{format!("Select {}", field.label().to_lowercase())}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <FieldError form field/>
        </div>
    }
}

/// Password input with a show/hide toggle. The toggle changes only the
/// input's `type`; the stored value is untouched.
#[component]
pub fn PasswordField(form: RwSignal<RegistrationState>) -> impl IntoView {
    let field = Field::Password;
    let invalid = move || field_is_invalid(form, field);
    let visible = move || form.with(RegistrationState::password_visible);
    let on_toggle = move |_| {
        form.update(|f| {
            f.toggle_password_visibility();
        });
    };

    view! {
        <div class="form-field" class:form-field--invalid=invalid>
            <label class="form-field__label" for=field.input_id()>{field.label()}</label>
            <div class="form-field__password">
                <input
                    class="form-field__input"
                    id=field.input_id()
                    name=field.name()
                    type=move || if visible() { "text" } else { "password" }
                    autocomplete="new-password"
                    aria-invalid=move || if invalid() { "true" } else { "false" }
                    prop:value=move || form.with(|f| f.value(field).to_owned())
                    on:input=move |ev| write_input(form, field, &event_target_value(&ev))
                />
                <button
                    class="form-field__toggle"
                    type="button"
                    aria-pressed=move || if visible() { "true" } else { "false" }
                    on:click=on_toggle
                >
                    {move || if visible() { "Hide" } else { "Show" }}
                </button>
            </div>
            <FieldError form field/>
        </div>
    }
}

/// Profile picture picker. Only presence of a selection is validated.
#[component]
pub fn FileField(form: RwSignal<RegistrationState>) -> impl IntoView {
    let field = Field::ProfilePicture;
    let invalid = move || field_is_invalid(form, field);
    let selected = move || form.with(|f| f.value(field).to_owned());

    view! {
        <div class="form-field" class:form-field--invalid=invalid>
            <label class="form-field__label" for=field.input_id()>{field.label()}</label>
            <input
                class="form-field__input form-field__file"
                id=field.input_id()
                name=field.name()
                type="file"
                accept="image/*"
                aria-invalid=move || if invalid() { "true" } else { "false" }
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    form.update(|f| f.select_file(&raw));
                }
            />
            <Show when=move || !selected().is_empty()>
                <p class="form-field__hint">{selected}</p>
            </Show>
            <FieldError form field/>
        </div>
    }
}
