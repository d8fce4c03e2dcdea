use super::*;

#[test]
fn missing_or_hash_href_is_placeholder() {
    assert!(is_placeholder_href(None));
    assert!(is_placeholder_href(Some("")));
    assert!(is_placeholder_href(Some("#")));
    assert!(is_placeholder_href(Some("  # ")));
}

#[test]
fn real_file_is_not_placeholder() {
    assert!(!is_placeholder_href(Some("/files/resume.pdf")));
    assert!(!is_placeholder_href(Some("https://example.com/cv.pdf")));
}

#[test]
fn shipped_resume_link_triggers_the_alert() {
    let content = crate::content::load().expect("embedded content should be valid");
    assert!(is_placeholder_href(content.owner.resume_href.as_deref()));
}
