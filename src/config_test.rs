use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = HostConfig::from_lookup(|_| None);
    assert_eq!(config.port, 3000);
    assert_eq!(config.site_root, None);
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_site_root_are_read() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("SITE_ROOT", "/srv/site")]));
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn invalid_port_falls_back_to_default() {
    for raw in ["", "abc", "70000", "-1"] {
        let config = HostConfig::from_lookup(lookup_from(&[("PORT", raw)]));
        assert_eq!(config.port, 3000, "PORT={raw:?}");
    }
}

#[test]
fn port_whitespace_trimmed() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")]));
    assert_eq!(config.port, 4000);
}

#[test]
fn blank_site_root_is_ignored() {
    let config = HostConfig::from_lookup(lookup_from(&[("SITE_ROOT", "   ")]));
    assert_eq!(config.site_root, None);
}

#[test]
fn from_env_reads_process_environment() {
    // Only asserts it does not panic; PORT may be set by the harness.
    let _ = HostConfig::from_env();
}
