use thiserror::Error;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("could not bridge log records: {0}")]
    Log(#[from] log::SetLoggerError),
    #[error("could not set default subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Builds the filter from an explicit level, falling back to `info` when none or an
/// unparseable one is given.
pub fn env_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_new(log_level.unwrap_or("info")).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to stderr. `json` swaps the pretty layer for one line
/// of json per event. Fails if a subscriber or logger was already installed in this process.
pub fn init_tracing(
    service_name: &'static str,
    log_level: Option<&str>,
    json: bool,
) -> Result<(), TracerError> {
    tracing_log::LogTracer::init()?;

    let subscriber = Registry::default().with(env_filter(log_level));
    let result = if json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_level(true)
            .with_current_span(true)
            .with_thread_names(true);
        set_global_default(subscriber.with(json_layer))
    } else {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr);
        set_global_default(subscriber.with(pretty_layer))
    };
    result?;

    log::debug!("tracing initialised for {service_name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_env_filter_defaults_to_info() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_env_filter_uses_given_level() {
        assert_eq!(env_filter(Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(env_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_init_tracing_installs_once() {
        assert!(init_tracing("tracer-test", Some("debug"), false).is_ok());
        assert!(matches!(
            init_tracing("tracer-test", None, true),
            Err(TracerError::Log(_))
        ));
    }
}
