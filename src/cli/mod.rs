//! CLI commands
//!
//! Command implementations for the `jenkins-auth` binary.

mod auth;
pub mod style;

pub use auth::{run_auth_setup, run_auth_test, run_login};

use jenkins_auth::client::ClientOptions;
use jenkins_auth::config::ConfigStore;
use jenkins_auth::error::Result;
use jenkins_auth::prompt::{BatchPrompter, DialoguerPrompter, Prompter};

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Server URL from `--url` or `JENKINS_URL`
    pub url: Option<String>,
    /// Batch mode: never prompt
    pub batch: bool,
    /// Verify TLS certificates
    pub verify_tls: bool,
}

impl GlobalOptions {
    /// Server URL, falling back to the last server logged into
    ///
    /// Returns an empty string when neither is known; resolution reports
    /// that as a configuration error.
    pub fn server_url(&self, store: &dyn ConfigStore) -> Result<String> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None => Ok(store.load()?.current_server),
        }
    }

    /// HTTP client options for these flags
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            insecure_skip_tls_verify: !self.verify_tls,
            ..ClientOptions::default()
        }
    }

    /// Prompter matching the batch flag
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if self.batch {
            Box::new(BatchPrompter)
        } else {
            Box::new(DialoguerPrompter::new())
        }
    }
}
