use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct WeatherApi {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Deserialize, Default)]
pub struct SessionParameters {
    pub secret_key: Option<String>,
    #[serde(default)]
    pub cookie_secure: bool,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServer,
    pub weather_api: WeatherApi,
    #[serde(default)]
    pub session: SessionParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// If the environment variable `WEATHER_API_KEY` is set it takes precedence over
/// whatever api key is given in the file.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    let mut config = parse_config(&toml)?;

    if let Ok(api_key) = std::env::var("WEATHER_API_KEY") {
        config.weather_api.api_key = api_key;
    }

    if config.weather_api.api_key.is_empty() {
        return Err(ConfigError::from("weather api key is missing"));
    }

    Ok(config)
}

/// Parses configuration from a toml string
///
/// # Arguments
///
/// * 'toml' - the configuration as toml
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;
    config.weather_api.base_url = config.weather_api.base_url.trim_end_matches('/').to_string();

    Ok(config)
}
