use std::fmt;
use reqwest::StatusCode;

#[derive(Debug)]
pub enum OpenWeatherError {
    Status(StatusCode),
    Request(String),
    Document(String),
}

impl OpenWeatherError {
    /// Returns true if the provider answered that the requested city doesn't exist
    ///
    pub fn is_not_found(&self) -> bool {
        matches!(self, OpenWeatherError::Status(status) if *status == StatusCode::NOT_FOUND)
    }
}

impl fmt::Display for OpenWeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpenWeatherError::Status(s) => write!(f, "OpenWeatherError::Status: {}", s),
            OpenWeatherError::Request(e) => write!(f, "OpenWeatherError::Request: {}", e),
            OpenWeatherError::Document(e) => write!(f, "OpenWeatherError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for OpenWeatherError {
    fn from(e: reqwest::Error) -> Self {
        OpenWeatherError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> Self {
        OpenWeatherError::Document(e.to_string())
    }
}
