//! Public landing page: hero banner plus a call to action.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::hero_banner::HeroBanner;
use crate::consts::{LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <HeroBanner/>
            <section class="landing-page__cta">
                <A href=REGISTER_PATH attr:class="button button--primary">"Register now"</A>
                <A href=LOGIN_PATH attr:class="button button--ghost">"I already have an account"</A>
            </section>
        </main>
    }
}
