//! Metron CLI
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.
//!
//! Environment:
//! - METRON_CULTURE: culture used when a request names none (default invariant)
//! - RUST_LOG: log filter (default info)

mod config;
mod handler;

use config::CliConfig;
use handler::{handle_request, malformed, Request, Response};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_logging("info");
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_filter);

    info!(version = SERVER_VERSION, culture = %config.culture, "metron ready");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "request received");

                let response = match serde_json::from_str::<Request>(line) {
                    Ok(request) => handle_request(&request, config.culture),
                    Err(err) => {
                        warn!(%err, "malformed request");
                        Response::error(None, malformed(err.to_string()))
                    }
                };

                if let Err(err) = write_response(&response) {
                    error!(%err, "cannot write response");
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                error!(%err, "cannot read input");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn write_response(response: &Response) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()
}
