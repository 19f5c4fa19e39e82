//! Credential resolver

use crate::auth::editor::edit_jenkins_auth;
use crate::auth::env::{
    BEARER_TOKEN_ENV, TOKEN_ENV, USERNAME_ENV, jenkins_auth_from_env, require_server_url,
};
use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::types::{AuthSource, JenkinsAuth, token_url};
use tracing::{debug, info};

/// Inputs to credential resolution
///
/// The environment is captured up front so resolution itself never reads
/// process state.
#[derive(Debug, Clone, Default)]
pub struct ResolveSettings {
    /// Jenkins server URL
    pub server_url: String,
    /// Never prompt; fail with instructions instead
    pub batch: bool,
    /// Credentials taken from `JENKINS_*` variables
    pub env_auth: JenkinsAuth,
}

impl ResolveSettings {
    /// Settings for `server_url` with credentials from the current environment
    pub fn from_env(server_url: impl Into<String>, batch: bool) -> Self {
        Self {
            server_url: server_url.into(),
            batch,
            env_auth: jenkins_auth_from_env(),
        }
    }
}

/// Valid credentials and where they came from
#[derive(Debug, Clone)]
pub struct ResolvedAuth {
    /// The credentials
    pub auth: JenkinsAuth,
    /// Where they were found
    pub source: AuthSource,
}

/// Resolve credentials for a Jenkins server
///
/// Priority:
/// 1. `JENKINS_USERNAME` + `JENKINS_TOKEN`, or `JENKINS_BEARER_TOKEN`
/// 2. Stored credentials for the server URL
/// 3. The login form (interactive mode only), which also saves the result
pub fn resolve_jenkins_auth(
    settings: &ResolveSettings,
    store: &dyn ConfigStore,
    prompter: &dyn Prompter,
) -> Result<ResolvedAuth> {
    let url = require_server_url(&settings.server_url)?;
    let token_url = token_url(url);

    let env_auth = &settings.env_auth;
    if !env_auth.is_invalid() {
        info!("Using Jenkins credentials from environment");
        return Ok(ResolvedAuth {
            auth: env_auth.clone(),
            source: AuthSource::EnvVar,
        });
    }

    let mut config = store.load()?;
    let stored_count = config.find_auths(url).len();
    if stored_count > 1 && env_auth.username.is_empty() {
        debug!("{stored_count} stored users for {url}, using the first");
    }

    let interactive = !settings.batch && prompter.is_interactive();
    let stored = config.find_auth(url, &env_auth.username).cloned();

    let (auth, source) = match stored {
        Some(auth) if !auth.is_invalid() => {
            info!("Using stored Jenkins credentials for user {}", auth.username);
            (auth, AuthSource::ConfigFile)
        }
        stored if interactive => {
            let current = stored.unwrap_or_else(|| env_auth.clone());
            let auth = edit_jenkins_auth(url, store, &mut config, &current, &token_url, prompter)?;
            (auth, AuthSource::Prompt)
        }
        stored => (stored.unwrap_or_default(), AuthSource::ConfigFile),
    };

    if !auth.is_invalid() {
        return Ok(ResolvedAuth { auth, source });
    }

    if interactive {
        // Only reachable when a prompter hands back an empty token.
        return Err(Error::Auth(format!(
            "no valid username and API token specified for Jenkins server: {url}"
        )));
    }

    print_batch_instructions(prompter, &token_url);
    Err(Error::Auth(format!(
        "no {USERNAME_ENV} and {TOKEN_ENV} (or {BEARER_TOKEN_ENV}) defined and no stored credentials for {url}"
    )))
}

fn print_batch_instructions(prompter: &dyn Prompter, token_url: &str) {
    prompter.message(&format!(
        "No ${USERNAME_ENV} and ${TOKEN_ENV} environment variables defined!"
    ));
    prompter.message("");
    prompter.message(&format!(
        "Please go to {token_url} and click 'Show API Token' to get your API Token"
    ));
    prompter.message("Then run this command on your terminal and try again:");
    prompter.message("");
    prompter.message(&format!("export {TOKEN_ENV}=myApiToken"));
    prompter.message("");
}
