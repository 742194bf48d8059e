//! Command-line argument parsing for ssepeek.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

use crate::adapters::ClientConfig;
use crate::config::StreamConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Connect and print events
    Peek(PeekArgs),
}

/// Arguments of the default peek command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeekArgs {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub skip_kinds: Vec<String>,
    /// Number of upcoming events to preview before printing (0 = none)
    pub preview: usize,
}

impl PeekArgs {
    pub fn client_config(&self) -> ClientConfig {
        self.headers
            .iter()
            .fold(ClientConfig::new(&self.url), |config, (name, value)| {
                config.with_header(name, value)
            })
    }

    /// Layer the `--skip` flags on top of a base config.
    pub fn stream_config(&self, base: StreamConfig) -> StreamConfig {
        self.skip_kinds
            .iter()
            .fold(base, |config, kind| config.with_skip_kind(kind))
    }
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("missing URL")]
    MissingUrl,
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid header '{0}', expected name:value")]
    InvalidHeader(String),
    #[error("invalid preview count '{0}'")]
    InvalidCount(String),
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

pub const USAGE: &str = "\
usage: ssepeek <URL> [options]

options:
  -H, --header NAME:VALUE   add a request header (repeatable)
      --skip KIND           drop events of this kind (repeatable)
      --peek N              preview the next N events before printing
  -V, --version             print version
  -h, --help                print this help";

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use ssestream::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ssepeek".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut peek = PeekArgs::default();
    let mut url = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--header" | "-H" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                peek.headers.push(parse_header(&value)?);
            }
            "--skip" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                peek.skip_kinds.push(value);
            }
            "--peek" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                peek.preview = value
                    .parse()
                    .map_err(|_| ArgsError::InvalidCount(value.clone()))?;
            }
            _ if arg.starts_with('-') => return Err(ArgsError::Unexpected(arg.clone())),
            _ if url.is_none() => url = Some(arg.clone()),
            _ => return Err(ArgsError::Unexpected(arg.clone())),
        }
    }

    peek.url = url.ok_or(ArgsError::MissingUrl)?;
    Ok(CliCommand::Peek(peek))
}

fn parse_header(value: &str) -> Result<(String, String), ArgsError> {
    match value.split_once(':') {
        Some((name, val)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), val.trim().to_string()))
        }
        _ => Err(ArgsError::InvalidHeader(value.to_string())),
    }
}
