//! Environment-sourced credentials

use crate::error::{Error, Result};
use crate::types::JenkinsAuth;
use std::env;

/// Jenkins server URL
pub const URL_ENV: &str = "JENKINS_URL";
/// Jenkins user name
pub const USERNAME_ENV: &str = "JENKINS_USERNAME";
/// Jenkins API token
pub const TOKEN_ENV: &str = "JENKINS_TOKEN";
/// Older spelling of [`TOKEN_ENV`], read when the former is unset
pub const API_TOKEN_ENV: &str = "JENKINS_API_TOKEN";
/// Bearer token, for servers behind an OAuth proxy
pub const BEARER_TOKEN_ENV: &str = "JENKINS_BEARER_TOKEN";

/// Read credentials from the process environment
pub fn jenkins_auth_from_env() -> JenkinsAuth {
    jenkins_auth_from_lookup(|key| env::var(key).ok())
}

/// Build credentials from an arbitrary variable lookup
///
/// Empty values count as unset.
pub fn jenkins_auth_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> JenkinsAuth {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    JenkinsAuth {
        username: get(USERNAME_ENV).unwrap_or_default(),
        api_token: get(TOKEN_ENV).or_else(|| get(API_TOKEN_ENV)).unwrap_or_default(),
        bearer_token: get(BEARER_TOKEN_ENV).unwrap_or_default(),
    }
}

/// Trimmed server URL, or a configuration error when there is none
pub(crate) fn require_server_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Config(format!(
            "no Jenkins server URL given; pass --url or set {URL_ENV}"
        )));
    }
    Ok(url)
}
