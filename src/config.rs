use std::env;

use crate::engine::resolver::{
    Origin, DEFAULT_ORIGIN_ADDRESS, DEFAULT_ORIGIN_LATITUDE, DEFAULT_ORIGIN_LONGITUDE,
};
use crate::error::AppError;
use crate::models::location::Coordinate;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub origin: Origin,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let coordinate = Coordinate::try_new(
            parse_or_default("ORIGIN_LATITUDE", DEFAULT_ORIGIN_LATITUDE)?,
            parse_or_default("ORIGIN_LONGITUDE", DEFAULT_ORIGIN_LONGITUDE)?,
        )
        .map_err(|err| AppError::Internal(format!("invalid origin: {err}")))?;

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: require_non_zero(
                "EVENT_BUFFER_SIZE",
                parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            )?,
            origin: Origin {
                coordinate,
                address: env::var("ORIGIN_ADDRESS")
                    .unwrap_or_else(|_| DEFAULT_ORIGIN_ADDRESS.to_string()),
            },
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        None => Ok(default),
    }
}

// broadcast::channel panics on a zero capacity.
fn require_non_zero(key: &str, value: usize) -> Result<usize, AppError> {
    if value == 0 {
        return Err(AppError::Internal(format!("invalid {key}: must be greater than 0")));
    }
    Ok(value)
}
