//! Jenkins credential resolution
//!
//! Credentials come from `JENKINS_*` environment variables, then the config
//! store, then the interactive login form.

mod editor;
mod env;
mod resolver;

pub use editor::{edit_jenkins_auth, login_jenkins_auth};
pub use env::{
    API_TOKEN_ENV, BEARER_TOKEN_ENV, TOKEN_ENV, URL_ENV, USERNAME_ENV, jenkins_auth_from_env,
    jenkins_auth_from_lookup,
};
pub use resolver::{ResolveSettings, ResolvedAuth, resolve_jenkins_auth};
