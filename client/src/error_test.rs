use super::*;

#[test]
fn missing_element_names_the_element() {
    let err = DomError::MissingElement("navbar");
    assert_eq!(err.to_string(), "missing element: navbar");
}

#[test]
fn js_error_carries_message() {
    let err = DomError::Js("scrollTo is not a function".to_owned());
    assert_eq!(err.to_string(), "browser call failed: scrollTo is not a function");
}
