//! Full-screen landing hero with staggered scroll-triggered text reveals.

#[cfg(all(test, feature = "ssr"))]
#[path = "hero_banner_test.rs"]
mod hero_banner_test;

use leptos::prelude::*;

use crate::consts::HERO_BACKGROUND_URL;
use crate::state::reveal::{HERO_REVEALS, RevealLatch, RevealSpec};

/// Hero banner. Pure presentation: no props, no outputs.
#[component]
pub fn HeroBanner() -> impl IntoView {
    let [eyebrow, headline, tagline] = HERO_REVEALS;
    let background = format!("background-image: url('{HERO_BACKGROUND_URL}');");

    view! {
        <section class="hero" style=background>
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <RevealBlock spec=eyebrow>
                    <p class="hero__eyebrow">"Saint Columban College"</p>
                </RevealBlock>
                <RevealBlock spec=headline>
                    <h1 class="hero__headline">"Join the College of Computer Studies Student Society"</h1>
                </RevealBlock>
                <RevealBlock spec=tagline>
                    <p class="hero__tagline">
                        "Connect with fellow students, grow your skills, and be part of every event this school year."
                    </p>
                </RevealBlock>
            </div>
        </section>
    }
}

/// Wrapper that fades and slides its children in the first time it scrolls
/// into view.
#[component]
fn RevealBlock(spec: RevealSpec, children: Children) -> impl IntoView {
    let latch = RwSignal::new(RevealLatch::default());
    let block_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(block) = block_ref.get() else {
                return;
            };
            crate::util::viewport::observe_once(&block, move || {
                latch.update(|l| {
                    l.observe(true);
                });
            });
        });
    }

    view! {
        <div
            class="reveal"
            node_ref=block_ref
            style=move || spec.style(latch.with(RevealLatch::is_revealed))
        >
            {children()}
        </div>
    }
}
