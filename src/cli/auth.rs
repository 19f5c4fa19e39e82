//! Auth commands - test, enter, and explain Jenkins credentials

use crate::cli::GlobalOptions;
use crate::cli::style::{Stream, Stylize, arrow, check, hyperlink_url, spinner_style};
use anstream::{eprintln, println};
use indicatif::ProgressBar;
use jenkins_auth::auth::{
    API_TOKEN_ENV, BEARER_TOKEN_ENV, ResolveSettings, TOKEN_ENV, URL_ENV, USERNAME_ENV,
    jenkins_auth_from_env, login_jenkins_auth,
};
use jenkins_auth::client::create_jenkins_client;
use jenkins_auth::config::FileConfigStore;
use jenkins_auth::error::{Error, Result};
use jenkins_auth::types::token_url;
use std::time::Duration;

/// Run the auth test command
///
/// Resolves credentials (prompting unless in batch mode) and asks the server
/// who they belong to.
pub async fn run_auth_test(opts: &GlobalOptions, store: &FileConfigStore) -> Result<()> {
    let server_url = opts.server_url(store)?;
    let settings = ResolveSettings::from_env(server_url, opts.batch);
    let prompter = opts.prompter();

    let client = create_jenkins_client(&settings, &opts.client_options(), store, prompter.as_ref())?;

    if !opts.verify_tls {
        eprintln!(
            "{}",
            "TLS certificate verification is disabled (use --verify-tls to enable)".warn()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Connecting to {}...", client.url()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let user = client.whoami().await;
    spinner.finish_and_clear();
    let user = user?;

    println!(
        "{} Authenticated as {}",
        check(),
        user.full_name.as_deref().unwrap_or(&user.id).accent()
    );
    println!("  {} {}", "User ID:".muted(), user.id);
    println!("  {} {}", "Server:".muted(), client.url());
    if let Some(source) = client.auth_source() {
        println!("  {} {}", "Source:".muted(), source);
    }
    Ok(())
}

/// Run the login command
///
/// Always shows the login form, seeded with the stored or environment
/// credentials, and makes the server the default for later commands.
pub fn run_login(opts: &GlobalOptions, store: &FileConfigStore) -> Result<()> {
    if opts.batch {
        return Err(Error::Config(
            "login needs an interactive terminal; drop --batch-mode".to_string(),
        ));
    }

    let server_url = opts.server_url(store)?;
    let prompter = opts.prompter();
    let auth = login_jenkins_auth(
        &server_url,
        &jenkins_auth_from_env(),
        store,
        prompter.as_ref(),
    )?;

    println!(
        "{} Saved credentials for {} on {}",
        check(),
        auth.username.accent(),
        server_url
    );
    println!("  {} {}", "Config:".muted(), store.path().display());
    Ok(())
}

/// Run the setup command (show instructions)
pub fn run_auth_setup(opts: &GlobalOptions, store: &FileConfigStore) {
    let token_page = opts.url.as_deref().map_or_else(
        || format!("<{URL_ENV}>/me/configure"),
        |url| hyperlink_url(Stream::Stdout, &token_url(url)),
    );

    println!("{}", "Jenkins Authentication Setup".emphasis());
    println!("============================");
    println!();
    println!("{} Get an API token", arrow());
    println!("  Open {token_page}");
    println!("  and click 'Show API Token' (or 'Add new Token')");
    println!();
    println!("{} Option 1: interactive login (stored on disk)", arrow());
    println!("  Run: jenkins-auth --url <server> login");
    println!("  Stored in: {}", store.path().display().accent());
    println!();
    println!("{} Option 2: environment variables", arrow());
    println!("  Set {USERNAME_ENV} and {TOKEN_ENV} ({API_TOKEN_ENV} also works)");
    println!("  or {BEARER_TOKEN_ENV} for token-based proxies");
    println!();
    println!("{}", format!("Set {URL_ENV} to skip --url on every command").muted());
}
