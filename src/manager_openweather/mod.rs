pub mod errors;
pub mod models;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::manager_openweather::models::{CurrentConditions, ForecastResponse};

/// Source of current conditions and forecasts for a city
///
/// Any error means the data is absent, callers may only ask whether the city was unknown.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<CurrentConditions, OpenWeatherError>;
    async fn forecast(&self, city: &str) -> Result<ForecastResponse, OpenWeatherError>;
}

/// Struct for fetching current weather and forecasts from an OpenWeather compatible api
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching weather data
    ///
    /// All requests are made with metric units.
    ///
    /// # Arguments
    ///
    /// * 'base_url' - base url of the api, e.g. `https://api.openweathermap.org/data/2.5`
    /// * 'api_key' - the api key (appid)
    pub fn new(base_url: &str, api_key: &str) -> Result<OpenWeather, OpenWeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Requests the given endpoint for a city and parses the response document
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - either `weather` or `forecast`
    /// * 'city' - name of the city, it will be percent encoded in the query string
    async fn get_document<T: DeserializeOwned>(&self, endpoint: &str, city: &str) -> Result<T, OpenWeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let req = self.client
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OpenWeatherError::Status(status));
        }

        let json = req.text().await?;
        parse_document(&json)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    async fn current(&self, city: &str) -> Result<CurrentConditions, OpenWeatherError> {
        info!("fetching weather data for city: {}", city);
        self.get_document("weather", city).await
            .inspect_err(|e| log_failure(e, "weather data", city))
    }

    async fn forecast(&self, city: &str) -> Result<ForecastResponse, OpenWeatherError> {
        info!("fetching forecast data for city: {}", city);
        self.get_document("forecast", city).await
            .inspect_err(|e| log_failure(e, "forecast data", city))
    }
}

/// Parses a response document, matching field names case-insensitively
///
/// # Arguments
///
/// * 'json' - the raw response body
pub fn parse_document<T: DeserializeOwned>(json: &str) -> Result<T, OpenWeatherError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_json::from_value(lowercase_keys(value))?)
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter().map(|(k, v)| (k.to_lowercase(), lowercase_keys(v))).collect()
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

fn log_failure(e: &OpenWeatherError, what: &str, city: &str) {
    match e {
        OpenWeatherError::Status(status) => warn!("api request for {} failed with status: {} (city: {})", what, status, city),
        _ => error!("error fetching {} for city: {}: {}", what, city, e),
    }
}
