//! JSON config file store

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::types::JenkinsConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config location: `<config dir>/jenkins-auth/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jenkins-auth").join("config.json"))
}

/// Config store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, action: &str, err: impl std::fmt::Display) -> Error {
        Error::Persistence(format!("failed to {action} {}: {err}", self.path.display()))
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<JenkinsConfig> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, starting empty", self.path.display());
                return Ok(JenkinsConfig::default());
            }
            Err(e) => return Err(self.persistence_error("read", e)),
        };

        if contents.trim().is_empty() {
            return Ok(JenkinsConfig::default());
        }

        serde_json::from_str(&contents).map_err(|e| self.persistence_error("parse", e))
    }

    fn save(&self, config: &JenkinsConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error("create directory for", e))?;
        }

        let contents =
            serde_json::to_string_pretty(config).map_err(|e| self.persistence_error("encode", e))?;

        // Write a sibling file then rename, so a crash never leaves a torn config
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| self.persistence_error("write", e))?;

        // Tokens live in here: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.persistence_error("set permissions on", e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| self.persistence_error("replace", e))?;
        debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
