//! Jenkins client factory
//!
//! Resolves credentials and builds a client in one step.

use crate::auth::{ResolveSettings, resolve_jenkins_auth};
use crate::client::{ClientOptions, JenkinsClient, build_client};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::prompt::Prompter;

/// Create an authenticated Jenkins client
///
/// May prompt for and save credentials unless `settings.batch` is set.
pub fn create_jenkins_client(
    settings: &ResolveSettings,
    options: &ClientOptions,
    store: &dyn ConfigStore,
    prompter: &dyn Prompter,
) -> Result<JenkinsClient> {
    let resolved = resolve_jenkins_auth(settings, store, prompter)?;
    Ok(build_client(&settings.server_url, resolved.auth, options)?.with_source(resolved.source))
}
