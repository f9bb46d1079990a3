mod aggregator;
mod config;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_history;
mod manager_openweather;
mod view_model;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{chart_data, clear_history, index, search};
use crate::initialization::{config, session_key, session_middleware};
use crate::manager_openweather::{OpenWeather, WeatherProvider};

pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let key = session_key(config.session.secret_key.as_deref())?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(
        OpenWeather::new(&config.weather_api.base_url, &config.weather_api.api_key)?
    );

    let cookie_secure = config.session.cookie_secure;

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(key.clone(), cookie_secure))
            .app_data(web::Data::new(AppState { provider: provider.clone() }))
            .service(index)
            .service(search)
            .service(chart_data)
            .service(clear_history)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
