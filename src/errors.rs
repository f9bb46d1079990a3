use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_openweather::errors::OpenWeatherError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<OpenWeatherError> for UnrecoverableError {
    fn from(e: OpenWeatherError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors while aggregating forecast samples
///
#[derive(Debug)]
pub struct AggregateError(pub String);
impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "AggregateError: {}", self.0) }
}
impl From<chrono::format::ParseError> for AggregateError {
    fn from(e: chrono::format::ParseError) -> Self { AggregateError(e.to_string()) }
}

/// Errors while producing chart data, a failed fetch is kept apart from a failed aggregation
///
#[derive(Debug, PartialEq)]
pub enum ChartDataError {
    Fetch,
    Processing(String),
}
impl fmt::Display for ChartDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChartDataError::Fetch => write!(f, "ChartDataError::Fetch"),
            ChartDataError::Processing(e) => write!(f, "ChartDataError::Processing: {}", e),
        }
    }
}
impl From<AggregateError> for ChartDataError {
    fn from(e: AggregateError) -> Self { ChartDataError::Processing(e.to_string()) }
}
