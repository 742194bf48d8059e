//! CLI module for ssepeek.
//!
//! Connects to an SSE endpoint, decodes every event as JSON and prints one
//! value per line. With `--peek N` the next N events are previewed on
//! stderr first; previewing does not consume them, so they are printed
//! again in order.
//!
//! # Usage
//!
//! ```ignore
//! use ssestream::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! runtime.block_on(run_cli_command(command))?;
//! ```

pub mod args;

pub use args::{parse_args, ArgsError, CliCommand, PeekArgs, USAGE};

use color_eyre::Result;
use serde_json::Value;
use std::io::Write;

use crate::adapters::connect;
use crate::config::StreamConfig;
use crate::stream::TypedStream;
use crate::traits::EventSource;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a parsed CLI command.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            println!("ssepeek {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Peek(args) => run_peek(args).await,
    }
}

async fn run_peek(args: PeekArgs) -> Result<()> {
    let source = connect(&args.client_config())?;
    let config = args.stream_config(StreamConfig::from_env());
    let mut stream: TypedStream<Value, _> = TypedStream::new(source, None).with_config(config);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let printed = pump(&mut stream, args.preview, &mut stdout.lock(), &mut stderr.lock()).await?;
    tracing::info!(printed, "stream finished");

    let outcome = stream.err().cloned();
    stream.close().await?;

    match outcome {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Print the preview to `preview_out`, then every value to `out`.
///
/// Returns the number of values written to `out`. Stream termination is
/// left for the caller to inspect through `err`.
pub async fn pump<S, W, P>(
    stream: &mut TypedStream<Value, S>,
    preview: usize,
    out: &mut W,
    preview_out: &mut P,
) -> std::io::Result<usize>
where
    S: EventSource,
    W: Write,
    P: Write,
{
    if preview > 0 {
        let upcoming = stream.peek_n(preview).await;
        writeln!(preview_out, "next {} event(s):", upcoming.len())?;
        for value in &upcoming {
            writeln!(preview_out, "  {}", value)?;
        }
    }

    let mut printed = 0;
    while stream.next().await {
        if let Some(value) = stream.current() {
            writeln!(out, "{}", value)?;
            printed += 1;
        }
    }
    out.flush()?;

    Ok(printed)
}
