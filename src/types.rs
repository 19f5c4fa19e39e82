//! Core types for jenkins-auth

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username offered by the login form when nothing better is known
pub const DEFAULT_USERNAME: &str = "admin";

/// Credentials for a single Jenkins server
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JenkinsAuth {
    /// Jenkins user name
    pub username: String,
    /// API token from the user's configure page
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_token: String,
    /// Bearer token, used instead of basic auth when no API token is set
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bearer_token: String,
}

impl JenkinsAuth {
    /// Create basic (username + API token) credentials
    pub fn basic(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
            bearer_token: String::new(),
        }
    }

    /// Create bearer-token credentials
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer_token: token.into(),
            ..Self::default()
        }
    }

    /// True when neither an API token nor a bearer token is present
    pub fn is_invalid(&self) -> bool {
        self.api_token.is_empty() && self.bearer_token.is_empty()
    }
}

impl fmt::Debug for JenkinsAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() { "" } else { "<redacted>" }
        }

        f.debug_struct("JenkinsAuth")
            .field("username", &self.username)
            .field("api_token", &redact(&self.api_token))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

/// Known users for one Jenkins server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JenkinsServer {
    /// Server base URL
    pub url: String,
    /// Stored credentials, in insertion order
    pub users: Vec<JenkinsAuth>,
}

/// Persisted credential store contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JenkinsConfig {
    /// Username most recently entered in the login form
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_username: String,
    /// Server most recently logged into
    #[serde(skip_serializing_if = "String::is_empty")]
    pub current_server: String,
    /// Per-server credentials
    pub servers: Vec<JenkinsServer>,
}

impl JenkinsConfig {
    /// Look up the server entry for a URL (trailing slashes ignored)
    pub fn find_server(&self, url: &str) -> Option<&JenkinsServer> {
        self.servers.iter().find(|s| same_url(&s.url, url))
    }

    /// All stored credentials for a URL
    pub fn find_auths(&self, url: &str) -> &[JenkinsAuth] {
        self.find_server(url)
            .map(|s| s.users.as_slice())
            .unwrap_or_default()
    }

    /// Stored credentials for a URL and username
    ///
    /// An empty username selects the first stored entry. There is no
    /// smarter policy for choosing between several users yet.
    pub fn find_auth(&self, url: &str, username: &str) -> Option<&JenkinsAuth> {
        let auths = self.find_auths(url);
        if username.is_empty() {
            auths.first()
        } else {
            auths.iter().find(|a| a.username == username)
        }
    }

    /// Insert or replace the credentials for `auth.username` on a server
    pub fn set_auth(&mut self, url: &str, auth: JenkinsAuth) {
        let idx = match self.servers.iter().position(|s| same_url(&s.url, url)) {
            Some(idx) => idx,
            None => {
                self.servers.push(JenkinsServer {
                    url: url.to_string(),
                    users: Vec::new(),
                });
                self.servers.len() - 1
            }
        };

        let users = &mut self.servers[idx].users;
        match users.iter_mut().find(|a| a.username == auth.username) {
            Some(existing) => *existing = auth,
            None => users.push(auth),
        }
    }
}

/// Token page for a server: `<url>/me/configure`
pub fn token_url(server_url: &str) -> String {
    format!("{}/me/configure", server_url.trim_end_matches('/'))
}

fn same_url(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

/// Where resolved credentials came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// `JENKINS_*` environment variables
    EnvVar,
    /// Persisted config file
    ConfigFile,
    /// Entered in the interactive login form
    Prompt,
}

impl fmt::Display for AuthSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EnvVar => "environment",
            Self::ConfigFile => "config file",
            Self::Prompt => "login form",
        })
    }
}

/// A Jenkins user as reported by `/me/api/json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsUser {
    /// User ID
    pub id: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
}
