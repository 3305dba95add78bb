// src/shared/api/validate.rs
use regex::Regex;
use std::sync::OnceLock;

static HTTP_URL: OnceLock<Regex> = OnceLock::new();

/// URL columns are either empty (absent) or start with an http(s) scheme.
pub fn is_valid_http_url(value: &str) -> bool {
    let re = HTTP_URL.get_or_init(|| Regex::new(r"^https?://.+").expect("valid url regex"));
    value.is_empty() || re.is_match(value)
}

/// Required-field presence check for create requests: a missing field and a
/// blank one are the same thing.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
