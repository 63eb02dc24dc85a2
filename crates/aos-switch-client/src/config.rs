// Configuration for SwitchClient

use std::{fmt, str::FromStr};

use crate::{
    constants::{defaults, env_var},
    error::{Result, SwitchError},
};

/// REST API version tags understood by ArubaOS-Switch firmware
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
            ApiVersion::V3 => "v3",
            ApiVersion::V4 => "v4",
            ApiVersion::V5 => "v5",
            ApiVersion::V6 => "v6",
            ApiVersion::V7 => "v7",
            ApiVersion::V8 => "v8",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(ApiVersion::V1),
            "v2" => Ok(ApiVersion::V2),
            "v3" => Ok(ApiVersion::V3),
            "v4" => Ok(ApiVersion::V4),
            "v5" => Ok(ApiVersion::V5),
            "v6" => Ok(ApiVersion::V6),
            "v7" => Ok(ApiVersion::V7),
            "v8" => Ok(ApiVersion::V8),
            other => Err(SwitchError::Config(format!(
                "unknown API version '{}'",
                other
            ))),
        }
    }
}

/// Connection parameters for a single switch
#[derive(Clone, Debug)]
pub struct ClientInit {
    /// Scheme, host and port of the switch (e.g. "https://switch.example")
    pub origin: String,
    /// REST API version (default: v1)
    pub version: ApiVersion,
    /// Username for authentication (default: "manager")
    pub username: String,
    /// Password for authentication (default: empty)
    pub password: String,
    /// Connection timeout in milliseconds; transport default when unset
    pub connect_timeout_ms: Option<u64>,
    /// Whole-request timeout in milliseconds; transport default when unset
    pub read_timeout_ms: Option<u64>,
}

impl ClientInit {
    /// Create a config for the given origin with default version and credentials
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            version: ApiVersion::default(),
            username: defaults::USERNAME.to_string(),
            password: defaults::PASSWORD.to_string(),
            connect_timeout_ms: None,
            read_timeout_ms: None,
        }
    }

    /// Set the API version
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = Some(connect_ms);
        self.read_timeout_ms = Some(read_ms);
        self
    }

    /// Create from environment variables.
    ///
    /// `ARUBAOS_SWITCH_ORIGIN` is required; version, username and password
    /// fall back to their defaults when unset.
    pub fn from_env() -> Result<Self> {
        let origin = std::env::var(env_var::ORIGIN)
            .map_err(|_| SwitchError::Config(format!("{} is not set", env_var::ORIGIN)))?;

        let version = match std::env::var(env_var::VERSION) {
            Ok(v) => v.parse()?,
            Err(_) => ApiVersion::default(),
        };

        let username =
            std::env::var(env_var::USERNAME).unwrap_or_else(|_| defaults::USERNAME.to_string());
        let password =
            std::env::var(env_var::PASSWORD).unwrap_or_else(|_| defaults::PASSWORD.to_string());

        Ok(Self::new(&origin)
            .with_version(version)
            .with_auth(&username, &password))
    }

    /// Base URL every request path is appended to: `origin/rest/version`
    pub fn base_url(&self) -> String {
        format!(
            "{}{}{}",
            self.origin.trim_end_matches('/'),
            crate::constants::rest_path::REST_PREFIX,
            self.version
        )
    }
}
