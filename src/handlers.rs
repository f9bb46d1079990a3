use actix_session::Session;
use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use crate::errors::ChartDataError;
use crate::manager_history;
use crate::manager_history::models::SearchHistoryEntry;
use crate::manager_history::SessionStorage;
use crate::manager_openweather::WeatherProvider;
use crate::view_model;
use crate::view_model::DisplayModel;
use crate::AppState;

const FLASH_KEY: &str = "ErrorMessage";
const BLANK_CITY: &str = "Please enter a city name.";
const CITY_REQUIRED: &str = "City name is required";
const FORECAST_FAILED: &str = "Unable to fetch forecast data";
const CHART_FAILED: &str = "Error generating chart data";

#[derive(Deserialize, Debug)]
pub struct CityParams {
    city: Option<String>,
}

impl CityParams {
    fn city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

#[get("/")]
pub async fn index(params: web::Query<CityParams>, session: Session, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let flash = take_flash(&session);
    let history = manager_history::get(&session);
    let model = match params.city() {
        Some(city) => search_city(&session, data.provider.as_ref(), city, history).await,
        None => DisplayModel {
            search_history: history,
            error_message: flash.unwrap_or_default(),
            ..Default::default()
        },
    };

    HttpResponse::Ok().json(model)
}

#[post("/search")]
pub async fn search(form: web::Form<CityParams>, session: Session, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", form);

    let Some(city) = form.city() else {
        set_flash(&session, BLANK_CITY);
        return redirect_to_index();
    };

    let history = manager_history::get(&session);
    let model = search_city(&session, data.provider.as_ref(), city, history).await;
    if model.is_error() {
        set_flash(&session, &model.error_message);
        return redirect_to_index();
    }

    HttpResponse::Ok().json(model)
}

#[get("/chart-data")]
pub async fn chart_data(params: web::Query<CityParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let Some(city) = params.city() else {
        return HttpResponse::Ok().json(json!({ "error": CITY_REQUIRED }));
    };

    match view_model::chart_data(data.provider.as_ref(), city).await {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(ChartDataError::Fetch) => HttpResponse::Ok().json(json!({ "error": FORECAST_FAILED })),
        Err(ChartDataError::Processing(_)) => HttpResponse::Ok().json(json!({ "error": CHART_FAILED })),
    }
}

#[post("/clear-history")]
pub async fn clear_history(session: Session) -> impl Responder {
    manager_history::clear(&session);
    redirect_to_index()
}

/// Builds the display model for a city and records the search if it succeeded
///
/// # Arguments
///
/// * 'session' - the user session
/// * 'provider' - weather data provider
/// * 'city' - the searched city
/// * 'history' - search history before this search
async fn search_city(session: &Session, provider: &dyn WeatherProvider, city: &str, history: Vec<SearchHistoryEntry>) -> DisplayModel {
    let mut model = view_model::build(provider, city, history).await;

    if !model.is_error() {
        match manager_history::record(session, city) {
            Ok(history) => model.search_history = history,
            Err(e) => error!("failed to record search history: {}", e),
        }
    }

    model
}

fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.set_string(FLASH_KEY, message.to_string()) {
        error!("failed to store flash message: {}", e);
    }
}

fn take_flash(session: &Session) -> Option<String> {
    let message = session.get_string(FLASH_KEY);
    if message.is_some() {
        SessionStorage::remove(session, FLASH_KEY);
    }
    message
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
