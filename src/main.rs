//! Othello AI player process
//!
//! Speaks the controller line protocol on stdin/stdout. Logs go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use othello::protocol::{self, SessionOptions, DEFAULT_NAME};
use othello::Evaluation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Score depth-cutoff positions by corner control instead of disk count
    #[arg(long)]
    heuristic: bool,

    /// Name announced to the controller
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        // stdout belongs to the protocol
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let options = SessionOptions {
        name: args.name,
        evaluation: if args.heuristic {
            Evaluation::CornerHeuristic
        } else {
            Evaluation::DiskCount
        },
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = protocol::run(stdin.lock(), stdout.lock(), &options)
        .context("controller session failed")?;

    log::info!(
        "session finished as {}: {} moves, {} passes",
        summary.color,
        summary.moves,
        summary.passes
    );
    Ok(())
}
