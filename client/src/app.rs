//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::consts::STYLESHEET_URL;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage, register::RegisterPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The landing hero and the registration form are independent leaf views;
/// nothing is shared between routes, so no context is provided.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_URL/>
        <Title text="CCS Student Society"/>
        <Meta name="description" content="Register as a member of the College of Computer Studies student society."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
