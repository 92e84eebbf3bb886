use std::panic;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Line format of emitted log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per record, including the enclosing `match_request` span.
    Json,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown log format `{0}` (expected `text` or `json`)")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

/// Where and how a ranking process logs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSettings {
    pub format: LogFormat,
    /// Daily-rotated `<dir>/<app>.log`; stderr when unset.
    pub dir: Option<PathBuf>,
    /// Also run the default panic hook (prints the backtrace when enabled).
    pub include_backtrace: bool,
}

impl LogSettings {
    /// `JM_LOG_FORMAT`, `JM_LOG_DIR`, `JM_LOG_INCLUDE_BACKTRACE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown formats keep the text default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            format: lookup("JM_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            dir: lookup("JM_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            include_backtrace: lookup("JM_LOG_INCLUDE_BACKTRACE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

/// Route panics through `tracing` so a crashed ranking run leaves a record in the
/// same sink as its request span. Installed once per process.
pub fn install_tracing_panic_hook(app_name: &'static str, settings: &LogSettings) {
    static INSTALLED: OnceLock<()> = OnceLock::new();
    let include_backtrace = settings.include_backtrace;

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(
                application = app_name,
                location = %info
                    .location()
                    .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                    .unwrap_or_else(|| "unknown".into()),
                panic_message = %message,
                "ranking aborted by panic"
            );

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn file_writer(app_name: &'static str, dir: &Path) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("{app_name}: cannot create log dir {}: {err}; using stderr", dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(non_blocking))
}

/// Install the global subscriber. `RUST_LOG` filters (default `info`).
///
/// Stdout is never written to: it carries the ranked JSON.
pub fn init_tracing_subscriber(app_name: &'static str, settings: &LogSettings) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = settings.dir.as_deref().and_then(|dir| file_writer(app_name, dir));
    let ansi = file.is_none() && settings.format == LogFormat::Text;
    let writer = file.unwrap_or_else(|| BoxMakeWriter::new(std::io::stderr));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(ansi);

    let _ = match settings.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
    };
}
