//! Admin session lookup
//!
//! The platform sets a session cookie at login. The console reads it once
//! at startup and passes the token explicitly to every call that needs it,
//! so there is no hidden global an API function can reach into.

use wasm_bindgen::JsCast;

const SESSION_COOKIE: &str = "paideia_session";

/// Bearer token of the signed-in admin, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    token: Option<String>,
}

impl AuthSession {
    /// Reads the session token from the document cookie.
    /// Returns an empty session when no cookie is set.
    pub fn from_document() -> Self {
        let cookies = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default();
        Self {
            token: cookie_value(&cookies, SESSION_COOKIE),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Authorization header value, if a token is present
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "theme=dark; paideia_session=abc123; lang=en";
        assert_eq!(
            cookie_value(cookies, SESSION_COOKIE),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(cookie_value("theme=dark", SESSION_COOKIE), None);
        assert_eq!(cookie_value("paideia_session=", SESSION_COOKIE), None);
        assert_eq!(cookie_value("", SESSION_COOKIE), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(cookie_value("xpaideia_session=abc", SESSION_COOKIE), None);
    }

    #[test]
    fn bearer_header_includes_scheme() {
        let session = AuthSession::with_token("tok");
        assert_eq!(session.bearer(), Some("Bearer tok".to_string()));
        assert_eq!(AuthSession::default().bearer(), None);
    }
}
