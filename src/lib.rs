//! jenkins-auth - Jenkins credentials for command-line tools
//!
//! Resolves a username and API token (or bearer token) for a Jenkins server
//! from the environment, a local config file, or an interactive form, and
//! builds an HTTP client that uses them.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod types;
