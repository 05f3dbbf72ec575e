use std::sync::OnceLock;

use regex::Regex;

/// Minimal link-shape check for the suggestion flow: any `http://` or
/// `https://` prefixed token counts. Deliberately not full URL validation.
pub fn contains_link(text: &str) -> bool {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    let re = LINK_RE.get_or_init(|| Regex::new(r"https?://\S+").expect("link regex is valid"));
    re.is_match(text)
}
