//! Cookie access for the persisted session token.
//!
//! The bearer token is the only client state that survives a reload. It lives
//! in a single cookie with a fixed seven-day lifetime.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Lifetime of the token cookie, in days.
pub const TOKEN_TTL_DAYS: u32 = 7;

const SECONDS_PER_DAY: u32 = 86_400;

fn html_document() -> Option<HtmlDocument> {
    let document = web_sys::window()?.document()?;
    document.dyn_into().ok()
}

/// Read a cookie value by name, if present.
pub fn read(name: &str) -> Option<String> {
    let cookie_string = html_document()?.cookie().ok()?;
    parse_cookie(&cookie_string, name)
}

/// Write a cookie with the given lifetime in days.
pub fn write(name: &str, value: &str, ttl_days: u32) {
    if let Some(document) = html_document() {
        let max_age = ttl_days * SECONDS_PER_DAY;
        let _ = document.set_cookie(&format!(
            "{name}={value}; max-age={max_age}; path=/; samesite=lax"
        ));
    }
}

/// Remove a cookie by expiring it immediately.
pub fn remove(name: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!("{name}=; max-age=0; path=/"));
    }
}

/// Extract a named value from a `document.cookie` string.
///
/// Pairs without `=` (browsers allow nameless cookies) are skipped, not
/// treated as the end of the scan.
fn parse_cookie(cookie_string: &str, name: &str) -> Option<String> {
    for pair in cookie_string.split(';') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == name {
            return Some(value.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_finds_named_value() {
        let cookies = "theme=dark; token=abc123; lang=en";

        assert_eq!(parse_cookie(cookies, "token"), Some("abc123".to_string()));
        assert_eq!(parse_cookie(cookies, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_parse_cookie_missing_name() {
        assert_eq!(parse_cookie("theme=dark", "token"), None);
        assert_eq!(parse_cookie("", "token"), None);
    }

    #[test]
    fn test_parse_cookie_ignores_whitespace() {
        let cookies = "  token = abc123 ;lang=en";

        assert_eq!(parse_cookie(cookies, "token"), Some("abc123".to_string()));
    }

    #[test]
    fn test_parse_cookie_skips_nameless_pairs() {
        // A value-only cookie ahead of the token must not end the scan.
        let cookies = "flag; token=abc123";

        assert_eq!(parse_cookie(cookies, "token"), Some("abc123".to_string()));
        assert_eq!(parse_cookie("flag", "token"), None);
        assert_eq!(
            parse_cookie("; token=abc123", "token"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_token_cookie_contract() {
        assert_eq!(TOKEN_COOKIE, "token");
        assert_eq!(TOKEN_TTL_DAYS, 7);
    }
}
