use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Поставить глобальный fmt-подписчик `tracing`.
///
/// `RUST_LOG` имеет приоритет над уровнем из конфига.
/// Повторная установка (например, в тестах) молча игнорируется.
pub fn init_logging(logging: &LoggingConfig) {
    let level = logging.level().unwrap_or(Level::WARN);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
