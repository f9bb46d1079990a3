use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i32,
    pub humidity: i32,
}

/// One weather condition tag, `main` being the category (e.g. "Rain")
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WeatherTag {
    pub id: i32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    pub deg: i32,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Sys {
    pub country: String,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub sunrise: DateTime<Utc>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub sunset: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Clouds {
    pub all: i32,
}

/// Response from the `weather` endpoint
#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CurrentConditions {
    pub name: String,
    pub main: Main,
    pub weather: Vec<WeatherTag>,
    pub wind: Wind,
    pub sys: Sys,
    pub visibility: i32,
    pub clouds: Clouds,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub dt: DateTime<Utc>,
}

/// One 3-hour forecast point, `dt_txt` is formatted as `YYYY-MM-DD HH:MM:SS`
#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ForecastSample {
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub dt: DateTime<Utc>,
    pub main: Main,
    pub weather: Vec<WeatherTag>,
    pub wind: Wind,
    pub dt_txt: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ForecastCity {
    pub name: String,
    pub country: String,
}

/// Response from the `forecast` endpoint
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ForecastResponse {
    pub city: ForecastCity,
    pub list: Vec<ForecastSample>,
}
