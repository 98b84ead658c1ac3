//! Login page placeholder for existing members.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::consts::REGISTER_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="placeholder-page">
            <h1>"Member login"</h1>
            <p>"Sign-in for existing accounts is handled by the member portal."</p>
            <A href=REGISTER_PATH>"Need an account? Register"</A>
        </main>
    }
}
