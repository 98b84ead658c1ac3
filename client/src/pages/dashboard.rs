//! Post-registration landing area.
//!
//! The real dashboard belongs to the member portal; this route only confirms
//! where a completed registration ends up.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::consts::LANDING_PATH;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <main class="placeholder-page">
            <h1>"Welcome aboard"</h1>
            <p>"Your registration is complete. Member features will appear here."</p>
            <A href=LANDING_PATH>"Back to home"</A>
        </main>
    }
}
