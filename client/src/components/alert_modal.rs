//! Blocking alert dialog with a single confirm action.
//!
//! Used for the invalid-character notices and the registration success
//! acknowledgment. The dialog only closes through `on_confirm`; clicking the
//! backdrop does nothing. The confirm button is autofocused so Enter works.

use leptos::prelude::*;

/// Visual tone of the dialog icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertTone {
    Success,
    Warning,
}

impl AlertTone {
    fn class(self) -> &'static str {
        match self {
            AlertTone::Success => "alert-modal__icon alert-modal__icon--success",
            AlertTone::Warning => "alert-modal__icon alert-modal__icon--warning",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            AlertTone::Success => "✓",
            AlertTone::Warning => "!",
        }
    }
}

#[component]
pub fn AlertModal(
    tone: AlertTone,
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let on_confirm_click = move |_| on_confirm.run(());

    view! {
        <div class="alert-modal__backdrop">
            <div
                class="alert-modal"
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="alert-modal-title"
            >
                <div class=tone.class()>{tone.glyph()}</div>
                <h2 id="alert-modal-title" class="alert-modal__title">{title}</h2>
                <p class="alert-modal__message">{message}</p>
                <button class="alert-modal__confirm" type="button" autofocus=true on:click=on_confirm_click>
                    {confirm_label}
                </button>
            </div>
        </div>
    }
}
