//! Interactive login form

use crate::config::ConfigStore;
use crate::auth::env::require_server_url;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::types::{DEFAULT_USERNAME, JenkinsAuth, JenkinsConfig, token_url};
use tracing::info;

/// Ask for a username and API token, then save them for `server_url`
///
/// The username defaults to `current.username`, then the config's default
/// username, then `admin`. The saved entry also becomes the new default
/// username. Nothing is saved when the user aborts the form.
pub fn edit_jenkins_auth(
    server_url: &str,
    store: &dyn ConfigStore,
    config: &mut JenkinsConfig,
    current: &JenkinsAuth,
    token_url: &str,
    prompter: &dyn Prompter,
) -> Result<JenkinsAuth> {
    prompter.message("");
    prompter.message("To be able to connect to the Jenkins server we need a username and API Token");
    prompter.message("");
    prompter.message(&format!(
        "Please go to {token_url} and click 'Show API Token' to get your API Token"
    ));
    prompter.message("Then COPY the API token so that you can paste it into the form below:");
    prompter.message("");

    let default_username = [current.username.as_str(), config.default_username.as_str()]
        .into_iter()
        .find(|u| !u.is_empty())
        .unwrap_or(DEFAULT_USERNAME);

    let username = prompter.ask_required("Jenkins user name", default_username)?;
    let api_token = prompter.ask_required("Jenkins API Token", &current.api_token)?;
    prompter.message("");

    let auth = JenkinsAuth {
        username,
        api_token,
        bearer_token: current.bearer_token.clone(),
    };

    config.set_auth(server_url, auth.clone());
    config.default_username.clone_from(&auth.username);
    store.save(config)?;

    info!("Saved Jenkins credentials for user {}", auth.username);
    Ok(auth)
}

/// Show the login form for `server_url` and make it the current server
///
/// The form is seeded with the stored entry matching `env_auth.username`
/// (or the first stored entry when that is empty), falling back to
/// `env_auth` itself.
pub fn login_jenkins_auth(
    server_url: &str,
    env_auth: &JenkinsAuth,
    store: &dyn ConfigStore,
    prompter: &dyn Prompter,
) -> Result<JenkinsAuth> {
    let server_url = require_server_url(server_url)?;
    let mut config = store.load()?;
    let current = config
        .find_auth(server_url, &env_auth.username)
        .cloned()
        .unwrap_or_else(|| env_auth.clone());

    config.current_server = server_url.to_string();
    edit_jenkins_auth(
        server_url,
        store,
        &mut config,
        &current,
        &token_url(server_url),
        prompter,
    )
}
