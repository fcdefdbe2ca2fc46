//! HookGuard CLI - sign and verify webhook requests from the command line.
//!
//! # Usage
//!
//! ```text
//! HOOKGUARD_SIGNING_SECRET=s3cr3t hookguard sign --timestamp 1700000000 --body 'a=1&b=hello+world'
//! HOOKGUARD_SIGNING_SECRET=s3cr3t hookguard verify --timestamp 1700000000 \
//!     --signature v0=... --body 'a=1&b=hello+world'
//! ```
//!
//! When `--body` is omitted the form-encoded body is read from stdin.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOOKGUARD_SIGNING_SECRET` | *(required)* | Shared signing secret |
//! | `HOOKGUARD_MAX_AGE_SECS` | `300` | Replay window in seconds |
//! | `HOOKGUARD_REJECT_FUTURE` | `false` | Also reject timestamps too far ahead |
//! | `HOOKGUARD_SENDER` | `Slack` | Sender name for header names |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hookguard_auth::request::parse_form_body;
use hookguard_auth::{
    Clock, IncomingRequest, RequestSignatureVerifier, SystemClock, VerifierConfig,
};
use hookguard_core::HookGuardConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Sign and verify webhook requests.
#[derive(Debug, Parser)]
#[command(name = "hookguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the signature a sender would attach to a request.
    Sign(SignArgs),
    /// Check a signed request and print `authentic` or `rejected`.
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
struct SignArgs {
    /// Request timestamp in seconds since the epoch (defaults to now).
    #[arg(long)]
    timestamp: Option<String>,

    /// Form-encoded request body (read from stdin when omitted).
    #[arg(long)]
    body: Option<String>,
}

#[derive(Debug, Args)]
struct VerifyArgs {
    /// Value of the timestamp header.
    #[arg(long)]
    timestamp: String,

    /// Value of the signature header.
    #[arg(long)]
    signature: String,

    /// Current time in seconds since the epoch (defaults to the system clock).
    #[arg(long, allow_negative_numbers = true)]
    now: Option<i64>,

    /// Form-encoded request body (read from stdin when omitted).
    #[arg(long)]
    body: Option<String>,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout only carries command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Use the given body or read it from stdin.
fn read_body(body: Option<String>) -> Result<String> {
    if let Some(body) = body {
        return Ok(body);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read request body from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_owned())
}

fn run_sign(verifier: &RequestSignatureVerifier, args: SignArgs) -> Result<ExitCode> {
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| SystemClock.now_unix_secs().to_string());
    let fields = parse_form_body(read_body(args.body)?.as_bytes());

    debug!(timestamp = %timestamp, fields = fields.len(), "Signing request");

    println!("{}", verifier.sign(&timestamp, &fields));
    Ok(ExitCode::SUCCESS)
}

fn run_verify(verifier: &RequestSignatureVerifier, args: VerifyArgs) -> Result<ExitCode> {
    let fields = parse_form_body(read_body(args.body)?.as_bytes());
    let request = IncomingRequest::new(Some(args.timestamp), Some(args.signature), fields);
    let now = args.now.unwrap_or_else(|| SystemClock.now_unix_secs());

    if verifier.verify(&request, now) {
        println!("authentic");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("rejected");
        Ok(ExitCode::FAILURE)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = HookGuardConfig::from_env();

    init_tracing(&config.log_level)?;

    let verifier_config =
        VerifierConfig::from_core(&config).context("failed to build verifier configuration")?;

    info!(
        max_age_secs = config.max_age_secs,
        reject_future = config.reject_future,
        sender = %config.sender,
        "configured request verifier"
    );

    let verifier = RequestSignatureVerifier::new(verifier_config);

    match cli.command {
        Command::Sign(args) => run_sign(&verifier, args),
        Command::Verify(args) => run_verify(&verifier, args),
    }
}
