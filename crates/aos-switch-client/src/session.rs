// Session state held by a SwitchClient

/// Login state of a client. One session per client instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    /// Holds the cookie header value replayed on every request
    LoggedIn(String),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    /// Cookie header value, if logged in
    pub fn cookie(&self) -> Option<&str> {
        match self {
            Session::LoggedIn(cookie) => Some(cookie),
            Session::LoggedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.cookie(), None);
    }

    #[test]
    fn test_logged_in_cookie() {
        let session = Session::LoggedIn("sessionId=abc".to_string());
        assert!(session.is_logged_in());
        assert_eq!(session.cookie(), Some("sessionId=abc"));
    }
}
