//! jenkins-auth - Jenkins credentials for the command line
//!
//! CLI binary for checking, entering, and explaining Jenkins credentials.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jenkins_auth::config::{FileConfigStore, default_config_path};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "jenkins-auth")]
#[command(about = "Resolve, enter, and store Jenkins credentials")]
#[command(version)]
struct Cli {
    /// Jenkins server URL (defaults to the last server logged into)
    #[arg(long, global = true, env = "JENKINS_URL")]
    url: Option<String>,

    /// Never prompt; print instructions and fail when credentials are missing
    #[arg(short, long, global = true)]
    batch_mode: bool,

    /// Path to the credentials file
    #[arg(long, global = true, env = "JENKINS_AUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Verify the server's TLS certificate
    #[arg(long, global = true)]
    verify_tls: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve credentials and check them against the server
    Test,
    /// Enter and save credentials for the server
    Login,
    /// Show how to configure credentials
    Setup,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "jenkins_auth=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(default_config_path)
        .context("cannot determine config directory; pass --config")?;
    let store = FileConfigStore::new(config_path);

    let opts = cli::GlobalOptions {
        url: cli.url.filter(|u| !u.trim().is_empty()),
        batch: cli.batch_mode,
        verify_tls: cli.verify_tls,
    };

    match cli.command {
        Commands::Test => cli::run_auth_test(&opts, &store).await?,
        Commands::Login => cli::run_login(&opts, &store)?,
        Commands::Setup => cli::run_auth_setup(&opts, &store),
    }

    Ok(())
}
