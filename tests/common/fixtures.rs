//! Test data factories for jenkins-auth types
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use crate::common::memory_store::MemoryConfigStore;
use jenkins_auth::auth::ResolveSettings;
use jenkins_auth::types::{JenkinsAuth, JenkinsConfig};

/// Server URL used throughout the tests
pub const SERVER_URL: &str = "http://jenkins.example.com";

/// Token page for [`SERVER_URL`]
pub const TOKEN_URL: &str = "http://jenkins.example.com/me/configure";

/// Settings with no environment credentials
pub fn make_settings(batch: bool) -> ResolveSettings {
    ResolveSettings {
        server_url: SERVER_URL.to_string(),
        batch,
        env_auth: JenkinsAuth::default(),
    }
}

/// Settings with the given environment credentials
pub fn make_settings_with_env(env_auth: JenkinsAuth) -> ResolveSettings {
    ResolveSettings {
        env_auth,
        ..make_settings(false)
    }
}

/// Config holding `auths` for [`SERVER_URL`]
pub fn make_config(auths: &[JenkinsAuth]) -> JenkinsConfig {
    let mut config = JenkinsConfig::default();
    for auth in auths {
        config.set_auth(SERVER_URL, auth.clone());
    }
    config
}

/// In-memory store holding `auths` for [`SERVER_URL`]
pub fn make_store(auths: &[JenkinsAuth]) -> MemoryConfigStore {
    MemoryConfigStore::with_config(make_config(auths))
}
