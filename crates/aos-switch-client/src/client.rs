// SwitchClient - session-based access to the switch REST API

use std::{future::Future, sync::RwLock, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Client, Method, Response,
    header::{COOKIE, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::{
    config::ClientInit,
    constants::{CLI_STATUS_SUCCESS, rest_path},
    cookie,
    error::{Result, SwitchError},
    model::{CliRequest, CliResponse, ErrorResponse, LoginRequest, LoginResponse},
    session::Session,
};

/// Caller-supplied parts of a request: method, extra headers, query and JSON body.
///
/// Any `cookie` header set here is replaced by the client's session cookie.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Add a request header
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Send `body` as JSON
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Client for one switch, holding at most one login session
pub struct SwitchClient {
    client: Client,
    init: ClientInit,
    base_url: String,
    session: RwLock<Session>,
}

impl SwitchClient {
    /// Create a new client. No request is sent until `login` or `request`.
    pub fn new(init: ClientInit) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = init.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = init.read_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: init.base_url(),
            init,
            session: RwLock::new(Session::LoggedOut),
        })
    }

    /// `origin/rest/version`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the current session state
    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_logged_in()
    }

    fn cookie(&self) -> Option<String> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .cookie()
            .map(str::to_string)
    }

    fn set_session(&self, session: Session) {
        let mut guard = self.session.write().unwrap_or_else(|e| e.into_inner());
        *guard = session;
    }

    /// Build full URL under the REST base
    fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send a request under the REST base with the session cookie attached.
    ///
    /// Without a session no `cookie` header is sent. The response status is
    /// not checked.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Response> {
        let url = self.build_url(path);
        let RequestOptions {
            method,
            mut headers,
            query,
            body,
        } = options;

        debug!("{} {}", method, url);

        headers.remove(COOKIE);
        let mut builder = self.client.request(method, &url).headers(headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        if let Some(cookie) = self.cookie() {
            builder = builder.header(COOKIE, cookie);
        }

        Ok(builder.send().await?)
    }

    /// Open a session and keep its cookie for later requests.
    ///
    /// Logging in while already logged in replaces the held cookie.
    pub async fn login(&self) -> Result<()> {
        let body = serde_json::to_value(LoginRequest {
            user_name: &self.init.username,
            password: &self.init.password,
        })?;

        let response = self
            .request(
                rest_path::LOGIN_SESSIONS,
                RequestOptions::post().with_json(body),
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status.to_string()
                    } else {
                        body
                    }
                });
            error!("Login to {} failed with status {}", self.base_url, status);
            return Err(SwitchError::AuthFailed(message));
        }

        let cookie = match cookie::session_cookie(response.headers()) {
            Some(cookie) => Some(cookie),
            None => {
                let body = response.text().await.unwrap_or_default();
                serde_json::from_str::<LoginResponse>(&body)
                    .ok()
                    .and_then(|login| login.cookie)
                    .filter(|cookie| !cookie.is_empty())
            }
        };

        let cookie = cookie.ok_or_else(|| {
            SwitchError::AuthFailed("login response carried no session cookie".to_string())
        })?;

        self.set_session(Session::LoggedIn(cookie));
        debug!("Logged in to {}", self.base_url);
        Ok(())
    }

    /// Close the session. The held cookie is dropped whatever the switch answers.
    pub async fn logout(&self) -> Result<()> {
        let response = self
            .request(rest_path::LOGIN_SESSIONS, RequestOptions::delete())
            .await;
        self.set_session(Session::LoggedOut);
        let response = response?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!("Logout from {} failed with status {}", self.base_url, status);
            return Err(SwitchError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Logged out of {}", self.base_url);
        Ok(())
    }

    /// Run a CLI command and return its decoded, trimmed output.
    pub async fn run(&self, command: &str) -> Result<String> {
        let body = serde_json::to_value(CliRequest { cmd: command })?;
        let response = self
            .request(rest_path::CLI, RequestOptions::post().with_json(body))
            .await?;
        let response: CliResponse = self.handle_response(response).await?;

        if let Some(status) = response.status.as_deref() {
            let error_msg = response.error_msg.as_deref().unwrap_or_default();
            if status != CLI_STATUS_SUCCESS && !error_msg.is_empty() {
                return Err(SwitchError::CommandFailed(error_msg.to_string()));
            }
        }

        let encoded = response
            .result_base64_encoded
            .ok_or(SwitchError::MissingResult)?;
        let decoded = STANDARD.decode(encoded.trim())?;
        Ok(String::from_utf8_lossy(&decoded).trim().to_string())
    }

    /// Log in, send one request, log out.
    pub async fn request_once(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.with_session(|| self.request(path, options)).await
    }

    /// Log in, run one command, log out.
    pub async fn run_once(&self, command: &str) -> Result<String> {
        self.with_session(|| self.run(command)).await
    }

    /// Run `op` inside a session. Once login succeeded, logout is attempted
    /// on every exit path; the operation's error takes precedence.
    async fn with_session<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.login().await?;
        let outcome = op().await;
        let logout = self.logout().await;

        match (outcome, logout) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(logout_err)) => {
                warn!("Logout after failed operation also failed: {}", logout_err);
                Err(e)
            }
        }
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let result = response.json::<T>().await?;
            Ok(result)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            Err(SwitchError::RequestFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}
