use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(logging: &LoggingConfig, verbose: bool) -> String {
    if !logging.enabled {
        return "scout=warn".to_string();
    }
    if verbose {
        return "scout=debug,info".to_string();
    }
    format!("scout={}", logging.level)
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logger(logging: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(logging, verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
