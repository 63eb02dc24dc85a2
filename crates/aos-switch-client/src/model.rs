// Request and response bodies for the switch REST API

use serde::{Deserialize, Serialize};

/// Body of `POST /login-sessions`
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
}

/// Body of a successful login. Older firmware returns the cookie here
/// instead of in a `set-cookie` header.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub cookie: Option<String>,
}

/// Error body returned by the switch on a rejected call
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /cli`
#[derive(Clone, Debug, Serialize)]
pub struct CliRequest<'a> {
    pub cmd: &'a str,
}

/// Response of `POST /cli`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CliResponse {
    #[serde(default)]
    pub cmd: Option<String>,
    #[serde(default)]
    pub result_base64_encoded: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_msg: Option<String>,
}
