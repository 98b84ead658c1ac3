//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing hero and the registration form surfaces.
//! Rules live in `state`; components only bind them to the DOM.

pub mod alert_modal;
pub mod form_field;
pub mod hero_banner;
pub mod registration_form;
