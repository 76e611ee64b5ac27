//! jscrub: defensive JSON sanitization for untrusted input.
//!
//! jscrub takes JSON from sources you do not control (log shippers, webhook
//! payloads, scraped API responses) and produces a document that is
//! guaranteed to re-serialize as valid JSON text: control characters are
//! stripped from strings and keys, nesting depth is capped, and a null
//! document root is rejected. Every change is recorded, so callers can tell
//! a clean document from a repaired one.
//!
//! # Modules
//!
//! - [`sanitize`]: the sanitizer core, scrub reports, and file-level I/O
//! - [`error`]: error types for jscrub operations
//! - [`harness`]: fuzz entry points (behind the `fuzzing` feature)

pub mod error;
#[cfg(any(test, feature = "fuzzing"))]
pub mod harness;
pub mod sanitize;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::{ErrorKind, ScrubError};

use sanitize::{ScrubOptions, DEFAULT_MAX_DEPTH};

/// The jscrub CLI application.
#[derive(Parser)]
#[command(name = "jscrub")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Sanitize a JSON document and write the cleaned result.
    Sanitize(SanitizeArgs),

    /// Report what sanitizing a JSON document would change.
    Check(CheckArgs),
}

/// Arguments for the sanitize subcommand.
#[derive(clap::Args)]
struct SanitizeArgs {
    /// Input file to sanitize.
    input: PathBuf,

    /// Write the sanitized document here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Print the scrub report to stderr.
    #[arg(long)]
    report: bool,

    /// Maximum container nesting depth.
    #[arg(long, env = "JSCRUB_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// Input file to check.
    input: PathBuf,

    /// Exit non-zero if sanitization would change anything.
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    format: String,

    /// Maximum container nesting depth.
    #[arg(long, env = "JSCRUB_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

/// Run the jscrub CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ScrubError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sanitize(args)) => run_sanitize(args),
        Some(Commands::Check(args)) => run_check(args),
        None => {
            println!("jscrub {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Defensive JSON sanitizer for untrusted input.");
            println!();
            println!("Run 'jscrub --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the sanitize subcommand.
fn run_sanitize(args: SanitizeArgs) -> Result<(), ScrubError> {
    let opts = ScrubOptions {
        max_depth: args.max_depth,
    };
    let sanitized = sanitize::io::sanitize_json_file(&args.input, &opts)?;

    if args.report {
        eprint!("{}", sanitized.report);
    }

    match args.output {
        Some(path) => sanitize::io::write_json(&path, &sanitized.value)?,
        None => {
            let text = if args.compact {
                serde_json::to_string(&sanitized.value)
            } else {
                serde_json::to_string_pretty(&sanitized.value)
            }
            .map_err(|source| ScrubError::WriteJson {
                path: PathBuf::from("-"),
                source,
            })?;
            println!("{}", text);
        }
    }

    Ok(())
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), ScrubError> {
    let opts = ScrubOptions {
        max_depth: args.max_depth,
    };
    let sanitized = sanitize::io::sanitize_json_file(&args.input, &opts)?;

    match args.format.as_str() {
        "json" => {
            let text = serde_json::to_string_pretty(&sanitized.report).map_err(|source| {
                ScrubError::WriteJson {
                    path: PathBuf::from("-"),
                    source,
                }
            })?;
            println!("{}", text);
        }
        "text" => {
            print!("{}", sanitized.report);
        }
        other => {
            return Err(ScrubError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    if args.strict && !sanitized.report.is_clean() {
        return Err(ScrubError::Dirty {
            action_count: sanitized.report.action_count(),
            report: sanitized.report,
        });
    }

    Ok(())
}
