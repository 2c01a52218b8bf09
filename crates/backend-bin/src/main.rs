use std::path::PathBuf;
use std::process::ExitCode;

use authslice_common::{PublicUser, User};
use backend_lib::{
    config::Settings,
    error::AuthError,
    validation::validate_email_format,
    AppState,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Sign users up and in against the configured user directory
#[derive(Parser, Debug)]
#[command(name = "authslice", version, about)]
struct Cli {
    /// Config file (TOML or JSON); defaults to ./authslice.toml and ./authslice.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new user
    Signup(Credentials),
    /// Check a user's credentials
    Signin(Credentials),
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

async fn run(state: &AppState, command: Command) -> Result<User, AuthError> {
    match command {
        Command::Signup(creds) => {
            validate_email_format(&creds.email)?;
            state.auth.signup(&creds.email, &creds.password).await
        },
        Command::Signin(creds) => {
            validate_email_format(&creds.email)?;
            state.auth.signin(&creds.email, &creds.password).await
        },
    }
}

/// Line printed to stderr when a command fails; never carries internal detail
fn error_line(err: &AuthError) -> String {
    format!("{}: {}", err.error_code(), err.sanitized_message())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Initialize tracing; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let state = AppState::from_settings(settings)?;

    match run(&state, cli.command).await {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&PublicUser::from(&user))?);
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            eprintln!("{}", error_line(&err));
            Ok(ExitCode::FAILURE)
        },
    }
}
