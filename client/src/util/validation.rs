//! Contact-form field rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure predicates shared by the blur handlers and the submit gate in
//! `components::contact_form`. Every rule trims its input first and measures
//! length in characters, so multi-byte names count the way users see them.
//! Trimming and the email pattern use the browser's whitespace set, not
//! Rust's, so a value validates the same way it would in a form script.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::contact::{FieldKind, Validity};

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Same code points as `is_form_whitespace`, as a character-class body.
const FORM_WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Classify a raw field value according to the rule for `kind`.
pub fn validate(kind: FieldKind, raw: &str) -> Validity {
    match kind {
        FieldKind::Name => validate_name(raw),
        FieldKind::Email => validate_email(raw),
        FieldKind::Message => validate_message(raw),
    }
}

pub fn validate_name(raw: &str) -> Validity {
    validate_min_length(raw, NAME_MIN_CHARS)
}

pub fn validate_email(raw: &str) -> Validity {
    let value = trim_form(raw);
    if value.is_empty() {
        Validity::Empty
    } else if is_valid_email(value) {
        Validity::Valid
    } else {
        Validity::InvalidFormat
    }
}

pub fn validate_message(raw: &str) -> Validity {
    validate_min_length(raw, MESSAGE_MIN_CHARS)
}

fn validate_min_length(raw: &str, min_chars: usize) -> Validity {
    let len = trim_form(raw).chars().count();
    if len == 0 {
        Validity::Empty
    } else if len < min_chars {
        Validity::TooShort
    } else {
        Validity::Valid
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a `.`
/// inside the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whitespace as browsers define it for `String.prototype.trim` and `\s`.
/// Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_form(raw: &str) -> &str {
    raw.trim_matches(is_form_whitespace)
}

/// Inline error text for a field state, `None` when nothing should show.
pub fn error_message(kind: FieldKind, validity: Validity) -> Option<&'static str> {
    match (kind, validity) {
        (_, Validity::Valid) => None,
        (FieldKind::Name, Validity::Empty) => Some("Name is required"),
        (FieldKind::Name, _) => Some("Name must be at least 2 characters"),
        (FieldKind::Email, Validity::Empty) => Some("Email is required"),
        (FieldKind::Email, _) => Some("Please enter a valid email address"),
        (FieldKind::Message, Validity::Empty) => Some("Message is required"),
        (FieldKind::Message, _) => Some("Message must be at least 10 characters"),
    }
}
