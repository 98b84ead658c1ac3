//! Registration page: logo, form, and a link to the login view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::registration_form::RegistrationForm;
use crate::consts::{LOGIN_PATH, LOGO_URL};
use crate::state::registration::RegistrationDraft;

/// Registration page. Accepted drafts are handed to `record_registration`;
/// there is no backend, so the draft is only logged.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let on_submit = Callback::new(record_registration);

    view! {
        <main class="register-page">
            <div class="register-card">
                <header class="register-card__header">
                    <img class="register-card__logo" src=LOGO_URL alt="Organization logo"/>
                    <h1>"Create your account"</h1>
                    <p class="register-card__subtitle">"Fill in every field to register as a member."</p>
                </header>
                <RegistrationForm on_submit/>
                <p class="register-card__footer">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Log in"</A>
                </p>
            </div>
        </main>
    }
}

fn record_registration(draft: RegistrationDraft) {
    #[cfg(feature = "hydrate")]
    log::info!(
        "registration accepted: edp={} course={} email={}",
        draft.edp,
        crate::state::fields::FieldOption::value(draft.course),
        draft.email
    );
    #[cfg(not(feature = "hydrate"))]
    let _ = draft;
}
