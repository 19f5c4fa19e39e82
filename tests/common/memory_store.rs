//! In-memory config store for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use jenkins_auth::config::ConfigStore;
use jenkins_auth::error::{Error, Result};
use jenkins_auth::types::JenkinsConfig;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Config store held in memory
///
/// Features:
/// - Call tracking for `load`/`save`
/// - Error injection for failure path testing
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<JenkinsConfig>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_load: Mutex<Option<String>>,
    fail_save: Mutex<Option<String>>,
}

impl MemoryConfigStore {
    /// Create a store pre-populated with `config`
    pub fn with_config(config: JenkinsConfig) -> Self {
        Self {
            config: Mutex::new(config),
            ..Self::default()
        }
    }

    /// Snapshot of the stored config
    pub fn config(&self) -> JenkinsConfig {
        self.config.lock().unwrap().clone()
    }

    /// Number of `load` calls so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent `load` fail with `msg`
    pub fn fail_load(&self, msg: &str) {
        *self.fail_load.lock().unwrap() = Some(msg.to_string());
    }

    /// Make every subsequent `save` fail with `msg`
    pub fn fail_save(&self, msg: &str) {
        *self.fail_save.lock().unwrap() = Some(msg.to_string());
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<JenkinsConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = self.fail_load.lock().unwrap().as_ref() {
            return Err(Error::Persistence(msg.clone()));
        }
        Ok(self.config())
    }

    fn save(&self, config: &JenkinsConfig) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = self.fail_save.lock().unwrap().as_ref() {
            return Err(Error::Persistence(msg.clone()));
        }
        *self.config.lock().unwrap() = config.clone();
        Ok(())
    }
}
