//! Opaque session tokens and the `carhire_session` cookie.
//!
//! The raw token only ever lives in the client's cookie. The database stores
//! an HMAC-SHA256 of it keyed with the server's session secret, so a leaked
//! table cannot be replayed and cannot be matched without the secret.

use axum::http::header::{InvalidHeaderValue, COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::SessionConfig;

/// Name of the admin session cookie.
pub const SESSION_COOKIE_NAME: &str = "carhire_session";

/// Random bytes in a session token.
const TOKEN_BYTES: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// Generate a new random session token as lowercase hex.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Keyed hash of a session token, as stored in `admin_sessions.token_hash`.
pub fn hash_token(token: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(token.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}

/// `Set-Cookie` value carrying a freshly issued token.
pub fn session_cookie(
    config: &SessionConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.ttl_seconds()
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> HeaderValue {
    if config.cookie_secure {
        HeaderValue::from_static(
            "carhire_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure",
        )
    } else {
        HeaderValue::from_static("carhire_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

/// Read the session token from the `Cookie` header(s), if present and
/// non-empty.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else {
            continue;
        };
        for pair in value.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next().unwrap_or_default().trim();
            let Some(val) = parts.next() else {
                continue;
            };
            let val = val.trim();
            if key == SESSION_COOKIE_NAME && !val.is_empty() {
                return Some(val.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secure: bool) -> SessionConfig {
        SessionConfig {
            secret: "test-secret".to_string(),
            ttl_hours: 168,
            cookie_secure: secure,
        }
    }

    #[test]
    fn tokens_are_64_hex_chars_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_stable_and_keyed() {
        let token = generate_token();
        let h1 = hash_token(&token, "secret-a");
        assert_eq!(h1, hash_token(&token, "secret-a"));
        assert_ne!(h1, hash_token(&token, "secret-b"));
        assert_ne!(h1, token);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn cookie_has_expected_attributes() {
        let cookie = session_cookie(&config(false), "abc").unwrap();
        assert_eq!(
            cookie.to_str().unwrap(),
            "carhire_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800"
        );

        let secure = session_cookie(&config(true), "abc").unwrap();
        assert!(secure.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cleared = clear_session_cookie(&config(false));
        let value = cleared.to_str().unwrap();
        assert!(value.starts_with("carhire_session=;"));
        assert!(value.contains("Max-Age=0"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; carhire_session=tok123; lang=pt"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("tok123"));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("carhire_session=; other=1"));
        assert_eq!(extract_session_token(&headers), None);

        headers.insert(COOKIE, HeaderValue::from_static("flag; other=1"));
        assert_eq!(extract_session_token(&headers), None);
    }
}
