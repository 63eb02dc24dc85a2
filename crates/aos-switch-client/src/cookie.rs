//! Session cookie handling
//!
//! The switch answers a login with a `set-cookie` header. Only the
//! `name=value` pairs are replayed; attributes such as `Path` or `HttpOnly`
//! are dropped.

use reqwest::header::{HeaderMap, SET_COOKIE};

const COOKIE_SEPARATOR: &str = ", ";
const ATTRIBUTE_SEPARATOR: &str = "; ";

/// Turn a `set-cookie` value into a value usable as a `cookie` request header.
///
/// `"sessionId=abc123; Path=/, otherCookie=xyz; HttpOnly"` becomes
/// `"sessionId=abc123; otherCookie=xyz"`. Fragments without `=` (for example
/// the tail of an `Expires` date split on its comma) are skipped.
pub fn parse_set_cookie(set_cookie: &str) -> String {
    set_cookie
        .split(COOKIE_SEPARATOR)
        .filter_map(|cookie| cookie.split(ATTRIBUTE_SEPARATOR).next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect::<Vec<_>>()
        .join(ATTRIBUTE_SEPARATOR)
}

/// Collect every `set-cookie` header of a response into a single cookie value.
///
/// Returns `None` when the response set no usable cookie.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let joined = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(COOKIE_SEPARATOR);

    let cookie = parse_set_cookie(&joined);
    if cookie.is_empty() { None } else { Some(cookie) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_multiple_cookies() {
        assert_eq!(
            parse_set_cookie("sessionId=abc123; Path=/, otherCookie=xyz; HttpOnly"),
            "sessionId=abc123; otherCookie=xyz"
        );
    }

    #[test]
    fn test_parse_single_cookie() {
        assert_eq!(parse_set_cookie("sessionId=abc123"), "sessionId=abc123");
        assert_eq!(
            parse_set_cookie("sessionId=abc123; Path=/; Secure"),
            "sessionId=abc123"
        );
    }

    #[test]
    fn test_parse_skips_expires_fragment() {
        assert_eq!(
            parse_set_cookie("sessionId=abc; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Path=/"),
            "sessionId=abc"
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_set_cookie(""), "");
    }

    #[test]
    fn test_session_cookie_from_headers() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("sessionId=abc123; Path=/"));
        headers.append(SET_COOKIE, HeaderValue::from_static("otherCookie=xyz; HttpOnly"));

        assert_eq!(
            session_cookie(&headers).as_deref(),
            Some("sessionId=abc123; otherCookie=xyz")
        );
    }

    #[test]
    fn test_session_cookie_absent() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }
}
