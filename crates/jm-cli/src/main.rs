use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use jm_common::{
    MatchError, MatchingConfig, MatchingEngine,
    api::MatchRequest,
    logging::{LogFormat, LogSettings, init_tracing_subscriber, install_tracing_panic_hook},
};
use tracing::{error, info};

const APP_NAME: &str = "jm-match";

#[derive(Debug, Clone, Parser)]
#[command(name = "jm-match", about = "Rank job postings against a candidate profile")]
struct Cli {
    /// Match request JSON (profile fields plus `postings`); reads stdin when omitted
    #[arg(long, env = "JM_REQUEST_PATH")]
    request: Option<PathBuf>,

    /// Keep only the best N postings (overrides `limit` in the request)
    #[arg(long)]
    limit: Option<usize>,

    /// Print only the ordered postings, without scores
    #[arg(long, default_value_t = false)]
    postings_only: bool,

    /// Pretty-print the JSON output
    #[arg(long, env = "JM_PRETTY", default_value_t = false)]
    pretty: bool,

    /// Log line format on stderr or in JM_LOG_DIR: `text` or `json`
    #[arg(long, env = "JM_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

fn read_request(path: Option<&PathBuf>) -> Result<String, std::io::Error> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let engine = MatchingEngine::new(MatchingConfig::from_env())?;

    let body = read_request(cli.request.as_ref())?;
    let mut request = MatchRequest::from_json(&body)?;
    if cli.limit.is_some() {
        request.limit = cli.limit;
    }
    info!(
        postings = request.postings.len(),
        limit = ?request.limit,
        "ranking request"
    );

    let response = engine.handle_request(&request);
    let output = if cli.postings_only {
        let postings: Vec<_> = response
            .matched_jobs
            .into_iter()
            .map(|result| result.posting)
            .collect();
        encode(&postings, cli.pretty)?
    } else {
        encode(&response, cli.pretty)?
    };
    Ok(output)
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() {
    let _ = dotenv();
    let cli = Cli::parse();

    let mut log_settings = LogSettings::from_env();
    if let Some(format) = cli.log_format {
        log_settings.format = format;
    }
    init_tracing_subscriber(APP_NAME, &log_settings);
    install_tracing_panic_hook(APP_NAME, &log_settings);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!(error = %err, "match failed");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
