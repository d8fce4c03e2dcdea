use super::*;

// =============================================================
// Name
// =============================================================

#[test]
fn name_lengths_map_to_states_after_trim() {
    assert_eq!(validate_name(""), Validity::Empty);
    assert_eq!(validate_name("   "), Validity::Empty);
    assert_eq!(validate_name("A"), Validity::TooShort);
    assert_eq!(validate_name("  A  "), Validity::TooShort);
    assert_eq!(validate_name("Al"), Validity::Valid);
    assert_eq!(validate_name(" Ada Lovelace "), Validity::Valid);
}

#[test]
fn name_length_counts_characters_not_bytes() {
    assert_eq!(validate_name("é"), Validity::TooShort);
    assert_eq!(validate_name("李"), Validity::TooShort);
    assert_eq!(validate_name("李雷"), Validity::Valid);
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_examples() {
    assert_eq!(validate_email("a@b.c"), Validity::Valid);
    assert_eq!(validate_email("a@b"), Validity::InvalidFormat);
    assert_eq!(validate_email(""), Validity::Empty);
    assert_eq!(validate_email("a b@c.d"), Validity::InvalidFormat);
}

#[test]
fn email_is_trimmed_before_checking() {
    assert_eq!(validate_email("   "), Validity::Empty);
    assert_eq!(validate_email("  user@example.com  "), Validity::Valid);
}

#[test]
fn email_rejects_malformed_shapes() {
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email("a@b.c\td"));
    assert!(!is_valid_email("plainaddress"));
}

#[test]
fn email_accepts_dotted_and_subdomain_forms() {
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(is_valid_email("a@b..c"));
    assert!(is_valid_email("x+tag@host.io"));
}

#[test]
fn email_whitespace_follows_browser_set() {
    assert!(!is_valid_email("a\u{FEFF}b@c.d"));
    assert!(!is_valid_email("a\u{A0}b@c.d"));
    assert!(!is_valid_email("a@c.d\u{3000}e"));
    assert!(is_valid_email("a\u{85}b@c.d"));
    assert_eq!(validate_email("a\u{FEFF}b@c.d"), Validity::InvalidFormat);
    assert_eq!(validate_email("a\u{85}b@c.d"), Validity::Valid);
}

// =============================================================
// Whitespace
// =============================================================

#[test]
fn trim_uses_browser_whitespace() {
    assert_eq!(validate_name("\u{FEFF}"), Validity::Empty);
    assert_eq!(validate_name("\u{FEFF}A\u{FEFF}"), Validity::TooShort);
    assert_eq!(validate_name("\u{85}"), Validity::TooShort);
    assert_eq!(validate_email("\u{A0}user@example.com\u{2028}"), Validity::Valid);
}

#[test]
fn form_whitespace_set_differs_from_rust_at_bom_and_next_line() {
    assert!(is_form_whitespace('\u{FEFF}'));
    assert!(!is_form_whitespace('\u{85}'));
    for c in ['\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{2005}', '\u{3000}'] {
        assert!(is_form_whitespace(c), "{c:?} should be whitespace");
    }
    assert!(!is_form_whitespace('a'));
}

// =============================================================
// Message
// =============================================================

#[test]
fn message_lengths_map_to_states_after_trim() {
    assert_eq!(validate_message(""), Validity::Empty);
    assert_eq!(validate_message("h"), Validity::TooShort);
    assert_eq!(validate_message("123456789"), Validity::TooShort);
    assert_eq!(validate_message("  123456789  "), Validity::TooShort);
    assert_eq!(validate_message("1234567890"), Validity::Valid);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn error_messages_match_field_and_state() {
    assert_eq!(error_message(FieldKind::Name, Validity::Empty), Some("Name is required"));
    assert_eq!(
        error_message(FieldKind::Name, Validity::TooShort),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(error_message(FieldKind::Email, Validity::Empty), Some("Email is required"));
    assert_eq!(
        error_message(FieldKind::Email, Validity::InvalidFormat),
        Some("Please enter a valid email address")
    );
    assert_eq!(error_message(FieldKind::Message, Validity::Empty), Some("Message is required"));
    assert_eq!(
        error_message(FieldKind::Message, Validity::TooShort),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn valid_fields_have_no_message() {
    for kind in FieldKind::ALL {
        assert_eq!(error_message(kind, Validity::Valid), None);
    }
}

#[test]
fn validate_dispatches_by_kind() {
    assert_eq!(validate(FieldKind::Name, "Al"), Validity::Valid);
    assert_eq!(validate(FieldKind::Email, "Al"), Validity::InvalidFormat);
    assert_eq!(validate(FieldKind::Message, "Al"), Validity::TooShort);
}
