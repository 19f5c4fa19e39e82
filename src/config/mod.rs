//! Credential persistence
//!
//! The resolver only ever loads the whole config and writes it back whole.

mod file;

pub use file::{FileConfigStore, default_config_path};

use crate::error::Result;
use crate::types::JenkinsConfig;

/// Load/save access to the persisted [`JenkinsConfig`]
pub trait ConfigStore {
    /// Read the current config. A store with nothing saved yet returns an
    /// empty config.
    fn load(&self) -> Result<JenkinsConfig>;

    /// Replace the persisted config
    fn save(&self, config: &JenkinsConfig) -> Result<()>;
}
