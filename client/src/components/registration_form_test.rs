use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::consts::REGISTER_PATH;

fn render_form() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(REGISTER_PATH));
        view! {
            <Router>
                <RegistrationForm/>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn renders_every_field_in_document_order() {
    let html = render_form();
    let positions = Field::ALL
        .iter()
        .map(|field| {
            let id = format!("id=\"{}\"", field.input_id());
            html.find(&id).unwrap_or_else(|| panic!("missing {id}"))
        })
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
}

#[test]
fn renders_enabled_submit_button() {
    let html = render_form();
    assert!(html.contains("type=\"submit\""));
    assert!(html.contains("Register"));
    assert!(!html.contains("Submitting..."));
}

#[test]
fn dialogs_are_closed_on_first_render() {
    let html = render_form();
    assert!(!html.contains(ACKNOWLEDGMENT_TITLE));
    assert!(!html.contains("alertdialog"));
}

#[test]
fn select_options_come_from_option_sets() {
    let html = render_form();
    for (value, _) in option_pairs::<Course>() {
        assert!(html.contains(&format!("value=\"{value}\"")), "{value}");
    }
    assert!(html.contains("value=\"Regular Student\""));
}

#[test]
fn email_placeholder_uses_school_domain() {
    let html = render_form();
    assert!(html.contains(&format!("placeholder=\"firstname.lastname@{SCHOOL_EMAIL_DOMAIN}\"")));
}
