#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn focus_element_is_noop_outside_browser() {
    assert!(!focus_element("register-edp"));
}
