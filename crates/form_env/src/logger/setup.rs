//!
//! Setup logging subsystem.
//!

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::config;

/// Keeps the non-blocking log writers alive, logs are flushed when it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> Result<TelemetryGuard, tracing_subscriber::util::TryInitError> {
    let mut guards = Vec::new();

    let file_writer = if conf.file.enabled {
        let mut path: PathBuf = crate::env::workspace_path();
        path.push(&conf.file.path);

        let file_appender = tracing_appender::rolling::hourly(&path, &conf.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_filter = conf
            .file
            .filtering_directive
            .as_deref()
            .and_then(|directive| directive.parse::<filter::Targets>().ok())
            .unwrap_or_else(|| filter::Targets::new().with_default(conf.file.level.into_level()));

        let file_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(file_writer)
            .with_filter(file_filter);

        Some(file_layer)
    } else {
        None
    };

    let console_layer = if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = conf
            .console
            .filtering_directive
            .as_deref()
            .and_then(|directive| directive.parse::<filter::Targets>().ok())
            .unwrap_or_else(|| {
                let level = conf.console.level.into_level();
                crates_to_watch.into_iter().fold(
                    filter::Targets::new().with_default(tracing::Level::WARN),
                    |targets, acrate| targets.with_target(acrate.as_ref(), level),
                )
            });

        let console_layer = match conf.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_timer(fmt::time::time())
                .with_span_events(fmt::format::FmtSpan::ACTIVE)
                .pretty()
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
            config::LogFormat::Json => fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
        };

        Some(console_layer)
    } else {
        None
    };

    // Use 'RUST_LOG' environment variable will override the config settings
    tracing_subscriber::registry()
        .with(file_writer)
        .with(console_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(filter::LevelFilter::TRACE.into())
                .from_env_lossy(),
        )
        .try_init()?;

    tracing::debug!(service = service_name, "logger initialized");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}
