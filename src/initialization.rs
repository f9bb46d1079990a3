use std::env;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use log::{info, warn};
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Loads configuration from the file given as `--config=<path>` and sets up logging
///
pub fn config() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();
    let config_path = args.iter()
        .find_map(|a| a.strip_prefix("--config="))
        .ok_or(ConfigError::from("missing argument: --config=<config file>"))?;

    let config = load_config(config_path)?;
    setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    info!("weatherview version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Returns the key used for signing session cookies
///
/// Without a configured secret a random key is generated, which means sessions are lost
/// on restart.
///
/// # Arguments
///
/// * 'secret' - configured secret, at least 64 bytes
pub fn session_key(secret: Option<&str>) -> Result<Key, ConfigError> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes())
            .map_err(|e| ConfigError(format!("invalid session secret: {}", e))),
        None => {
            warn!("no session secret configured, using a generated key");
            Ok(Key::generate())
        }
    }
}

/// Returns the cookie session middleware
///
/// The session cookie is only marked `Secure` when asked to, since browsers never send a
/// secure cookie back over plain http.
///
/// # Arguments
///
/// * 'key' - key for signing session cookies
/// * 'cookie_secure' - whether the session cookie requires https
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .build()
}
