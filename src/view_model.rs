use chrono::{DateTime, Local};
use log::error;
use serde::Serialize;
use crate::aggregator::{build_chart_series, group_by_day, ChartSeries, DailyAggregate, DEFAULT_ICON, NOT_AVAILABLE};
use crate::errors::{AggregateError, ChartDataError};
use crate::manager_history::models::SearchHistoryEntry;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::manager_openweather::models::{CurrentConditions, ForecastResponse};
use crate::manager_openweather::WeatherProvider;

pub const CITY_NOT_FOUND: &str = "City not found. Please check the spelling and try again.";
pub const FETCH_FAILED: &str = "Unable to fetch weather data. Please try again later.";

/// Everything shown for one city search, an empty `error_message` means success
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub city_name: String,
    pub country: String,
    pub temperature: f64,
    pub formatted_temperature: String,
    pub feels_like: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub description: String,
    pub icon: String,
    pub humidity: i32,
    pub wind_speed: f64,
    pub wind_direction: i32,
    pub pressure: i32,
    pub visibility: i32,
    pub cloudiness: i32,
    pub sunrise: Option<DateTime<Local>>,
    pub sunset: Option<DateTime<Local>>,
    pub observed_at: Option<DateTime<Local>>,
    pub five_day_forecast: Vec<DailyAggregate>,
    pub search_history: Vec<SearchHistoryEntry>,
    pub error_message: String,
}

impl DisplayModel {
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

/// Builds the display model for a city
///
/// Current conditions and forecast are fetched concurrently and both are awaited.
/// Missing current conditions gives a model with only history and an error message,
/// while a missing forecast just leaves the five day forecast empty.
///
/// # Arguments
///
/// * 'provider' - weather data provider
/// * 'city' - the city to build the model for
/// * 'history' - the session's search history
pub async fn build(provider: &dyn WeatherProvider, city: &str, history: Vec<SearchHistoryEntry>) -> DisplayModel {
    let (current, forecast) = tokio::join!(provider.current(city), provider.forecast(city));

    let current = match current {
        Ok(current) => current,
        Err(e) => return error_model(history, api_error_message(&e)),
    };

    match assemble(current, forecast.ok()) {
        Ok(model) => DisplayModel { search_history: history, ..model },
        Err(e) => {
            error!("error processing weather data for city: {}: {}", city, e);
            error_model(history, FETCH_FAILED)
        }
    }
}

/// Fetches the forecast for a city and builds chart series for the next 24 hours
///
/// # Arguments
///
/// * 'provider' - weather data provider
/// * 'city' - the city to chart
pub async fn chart_data(provider: &dyn WeatherProvider, city: &str) -> Result<ChartSeries, ChartDataError> {
    let forecast = provider.forecast(city).await.map_err(|_| ChartDataError::Fetch)?;

    build_chart_series(&forecast.list).map_err(|e| {
        error!("error generating chart data for city: {}: {}", city, e);
        ChartDataError::from(e)
    })
}

/// Formats a temperature in Celsius rounded to one decimal, e.g. `12.4°C` or `12°C`
///
/// # Arguments
///
/// * 'temperature' - temperature in Celsius
pub fn format_temperature(temperature: f64) -> String {
    format!("{}°C", (temperature * 10.0).round() / 10.0)
}

/// Maps a provider failure to the message shown to the user
///
pub fn api_error_message(e: &OpenWeatherError) -> &'static str {
    if e.is_not_found() { CITY_NOT_FOUND } else { FETCH_FAILED }
}

fn error_model(history: Vec<SearchHistoryEntry>, message: &str) -> DisplayModel {
    DisplayModel {
        search_history: history,
        error_message: message.to_string(),
        ..Default::default()
    }
}

fn assemble(current: CurrentConditions, forecast: Option<ForecastResponse>) -> Result<DisplayModel, AggregateError> {
    let five_day_forecast = match forecast {
        Some(forecast) => group_by_day(&forecast.list)?,
        None => Vec::new(),
    };

    let (description, icon) = match current.weather.first() {
        Some(w) => (w.description.clone(), w.icon.clone()),
        None => (NOT_AVAILABLE.to_string(), DEFAULT_ICON.to_string()),
    };

    Ok(DisplayModel {
        city_name: current.name,
        country: current.sys.country,
        temperature: current.main.temp,
        formatted_temperature: format_temperature(current.main.temp),
        feels_like: current.main.feels_like,
        min_temp: current.main.temp_min,
        max_temp: current.main.temp_max,
        description,
        icon,
        humidity: current.main.humidity,
        wind_speed: current.wind.speed,
        wind_direction: current.wind.deg,
        pressure: current.main.pressure,
        visibility: current.visibility / 1000,
        cloudiness: current.clouds.all,
        sunrise: Some(current.sys.sunrise.with_timezone(&Local)),
        sunset: Some(current.sys.sunset.with_timezone(&Local)),
        observed_at: Some(current.dt.with_timezone(&Local)),
        five_day_forecast,
        search_history: Vec::new(),
        error_message: String::new(),
    })
}
