//! Jenkins HTTP client
//!
//! Builds the `reqwest` client used to talk to Jenkins and wraps it with the
//! resolved credentials.

mod factory;

pub use factory::create_jenkins_client;

use crate::error::{Error, Result};
use crate::types::{AuthSource, JenkinsAuth, JenkinsUser, token_url};
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Accept any TLS certificate. On by default because most Jenkins
    /// installs this tool talks to use self-signed certificates.
    pub insecure_skip_tls_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            insecure_skip_tls_verify: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("jenkins-auth/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Authenticated handle to one Jenkins server
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    http: Client,
    base: Url,
    url: String,
    auth: JenkinsAuth,
    source: Option<AuthSource>,
}

/// Build a client for `server_url` using `auth`
///
/// Redirects are never followed: Jenkins answers unauthenticated requests
/// with a redirect to its login page, and callers need to see that.
pub fn build_client(
    server_url: &str,
    auth: JenkinsAuth,
    options: &ClientOptions,
) -> Result<JenkinsClient> {
    let url = server_url.trim().trim_end_matches('/').to_string();
    let base = Url::parse(&format!("{url}/"))
        .map_err(|e| Error::Config(format!("invalid Jenkins URL '{url}': {e}")))?;

    if options.insecure_skip_tls_verify {
        debug!("TLS certificate verification disabled for {url}");
    } else if base.scheme() == "http" {
        warn!("TLS verification requested but {url} is plain HTTP");
    }

    let http = Client::builder()
        .danger_accept_invalid_certs(options.insecure_skip_tls_verify)
        .redirect(Policy::none())
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str())
        .build()?;

    Ok(JenkinsClient {
        http,
        base,
        url,
        auth,
        source: None,
    })
}

impl JenkinsClient {
    /// Server URL without a trailing slash
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Credentials attached to every request
    pub fn auth(&self) -> &JenkinsAuth {
        &self.auth
    }

    /// Where the credentials came from, when they were resolved
    pub fn auth_source(&self) -> Option<AuthSource> {
        self.source
    }

    /// Record where the credentials came from
    #[must_use]
    pub fn with_source(mut self, source: AuthSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Page where the user can create an API token
    pub fn token_url(&self) -> String {
        token_url(&self.url)
    }

    /// Underlying HTTP client, without credentials applied
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path relative to the server root
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Config(format!("invalid Jenkins path '{path}': {e}")))
    }

    /// Start an authenticated GET request
    pub fn get(&self, path: &str) -> Result<RequestBuilder> {
        Ok(self.authorize(self.http.get(self.endpoint(path)?)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if !self.auth.api_token.is_empty() {
            request.basic_auth(&self.auth.username, Some(&self.auth.api_token))
        } else if !self.auth.bearer_token.is_empty() {
            request.bearer_auth(&self.auth.bearer_token)
        } else {
            request
        }
    }

    /// Fetch the user the credentials belong to
    pub async fn whoami(&self) -> Result<JenkinsUser> {
        let response = self.get("me/api/json")?.send().await?;
        let status = response.status();

        if status.is_redirection()
            || status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
        {
            return Err(Error::Auth(format!(
                "Jenkins server {} rejected the credentials (HTTP {status})",
                self.url
            )));
        }

        if !status.is_success() {
            return Err(Error::JenkinsApi(format!(
                "GET /me/api/json returned HTTP {status}"
            )));
        }

        Ok(response.json().await?)
    }
}
