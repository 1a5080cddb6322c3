use thiserror::Error;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("could not forward log records to tracing: {0}")]
    LogBridge(#[from] log::SetLoggerError),
    #[error("a global subscriber is already set: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the global subscriber writing to stderr.
///
/// `log_level` takes an `EnvFilter` directive, falling back to `RUST_LOG` and then to `info`.
/// `json` switches from the pretty human readable output to one JSON object per event.
pub fn init_tracing(
    service_name: &'static str,
    log_level: Option<&str>,
    json: bool,
) -> Result<(), TracerError> {
    let env_filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_level(true)
            .with_current_span(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr)
    });
    let stderr_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
    });

    let subscriber = Registry::default()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer);

    set_global_default(subscriber)?;
    LogTracer::builder()
        .with_max_level(log::LevelFilter::Trace)
        .init()?;
    tracing::debug!(service = service_name, "Tracing initialised");
    Ok(())
}
