use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use taskboard::{CliError, Command};
use taskboard_client::{DEFAULT_API_URL, HttpTransport};

/// Environment variable name for the record store base URL
const TASKBOARD_API_URL_ENV: &str = "TASKBOARD_API_URL";

/// Taskboard - A task board client for REST record stores
#[derive(Parser)]
#[command(name = "tb")]
#[command(version = "0.1.0")]
#[command(about = "A task board client for REST record stores", long_about = None)]
struct Args {
    /// Base URL of the record store (can also be set via TASKBOARD_API_URL env var)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the store base URL from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --api-url argument
/// 2. TASKBOARD_API_URL environment variable (if non-empty)
/// 3. Default URL (http://localhost:3001)
fn resolve_api_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    if let Ok(env_url) = std::env::var(TASKBOARD_API_URL_ENV)
        && !env_url.is_empty()
    {
        return env_url;
    }

    DEFAULT_API_URL.to_string()
}

/// Initialize logging based on the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs, including request payloads
/// - `RUST_LOG=debug` - show each request issued to the store
/// - `RUST_LOG=error` - show only failures converted into surfaced errors
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> Result<(), CliError> {
    let args = Args::parse();
    run_with_args(&args).await
}

/// Run the application with the given arguments
async fn run_with_args(args: &Args) -> Result<(), CliError> {
    let api_url = resolve_api_url(args.api_url.clone());
    let transport = HttpTransport::new(api_url);

    match &args.command {
        Some(cmd) => {
            let result = cmd.execute(&transport).await?;
            println!("{}", result);
        }
        None => {
            println!("Welcome to Taskboard!");
            println!("Use 'tb --help' for usage information.");
        }
    }

    Ok(())
}
