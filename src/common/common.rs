use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into lowercased keys and percent-decoded raw
/// byte values. Repeated keys keep every value in arrival order, which is
/// what multi-hash scrapes rely on.
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw) = query else {
        return Ok(queries);
    };
    for query_item in raw.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_raw, value_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None)
        };
        let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            return Err(CustomError::new("empty query key"));
        }
        let entry = queries.entry(key_name).or_default();
        if let Some(value) = value_raw {
            entry.push(percent_encoding::percent_decode_str(value).collect::<Vec<u8>>());
        }
    }
    Ok(queries)
}

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, ConfigurationError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(ConfigurationError::InvalidLogLevel(level.to_string()))
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| ConfigurationError::InvalidValue(format!("logging: {e}")))?;
    info!("logging initialized.");
    Ok(())
}

/// Unix time in whole seconds, the unit every `last_seen` is stored in.
pub fn current_time() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Sleeps for `duration` unless shutdown fires first; `true` means shutdown.
pub async fn shutdown_waiting(duration: Duration, shutdown: Shutdown) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = shutdown.handle() => true,
    }
}
