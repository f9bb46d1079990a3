use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::StatusCode;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::manager_openweather::models::{Clouds, CurrentConditions, ForecastCity, ForecastResponse, ForecastSample, Main, Sys, WeatherTag, Wind};
use crate::manager_openweather::WeatherProvider;

/// Provider answering with canned data, absent data is answered with an error status
pub struct StubProvider {
    current: Result<CurrentConditions, StatusCode>,
    forecast: Result<ForecastResponse, StatusCode>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(current: Option<CurrentConditions>, forecast: Option<ForecastResponse>) -> Self {
        Self {
            current: current.ok_or(StatusCode::SERVICE_UNAVAILABLE),
            forecast: forecast.ok_or(StatusCode::SERVICE_UNAVAILABLE),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_statuses(current: StatusCode, forecast: StatusCode) -> Self {
        Self { current: Err(current), forecast: Err(forecast), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current(&self, _city: &str) -> Result<CurrentConditions, OpenWeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.current.clone().map_err(OpenWeatherError::Status)
    }

    async fn forecast(&self, _city: &str) -> Result<ForecastResponse, OpenWeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.forecast.clone().map_err(OpenWeatherError::Status)
    }
}

pub fn current_conditions() -> CurrentConditions {
    CurrentConditions {
        name: "Stockholm".to_string(),
        main: Main { temp: 12.4, feels_like: 11.2, temp_min: 10.9, temp_max: 13.8, pressure: 1008, humidity: 81 },
        weather: vec![WeatherTag { id: 500, main: "Rain".to_string(), description: "light rain".to_string(), icon: "10d".to_string() }],
        wind: Wind { speed: 5.1, deg: 240 },
        sys: Sys {
            country: "SE".to_string(),
            sunrise: DateTime::from_timestamp(1717985000, 0).unwrap_or_default(),
            sunset: DateTime::from_timestamp(1718050000, 0).unwrap_or_default(),
        },
        visibility: 8000,
        clouds: Clouds { all: 75 },
        dt: DateTime::from_timestamp(1718000000, 0).unwrap_or_default(),
    }
}

/// Forecast with `count` samples three hours apart starting at midnight 2024-06-10
pub fn forecast(count: usize) -> ForecastResponse {
    let list = (0..count)
        .map(|i| {
            let hours = i * 3;
            ForecastSample {
                main: Main { temp: 10.0 + i as f64, temp_min: 9.0 + i as f64, temp_max: 11.0 + i as f64, humidity: 60, ..Default::default() },
                weather: vec![WeatherTag { main: "Clouds".to_string(), description: "few clouds".to_string(), icon: "02d".to_string(), ..Default::default() }],
                wind: Wind { speed: 3.0, deg: 90 },
                dt_txt: format!("2024-06-{:02} {:02}:00:00", 10 + hours / 24, hours % 24),
                ..Default::default()
            }
        })
        .collect();

    ForecastResponse {
        city: ForecastCity { name: "Stockholm".to_string(), country: "SE".to_string() },
        list,
    }
}
