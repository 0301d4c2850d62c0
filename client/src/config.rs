use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub api_url: String,
    pub webhook_url: Option<String>,
    pub status_poll_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: try_load("PANDAREN_API_URL", "http://localhost:3001"),
            webhook_url: optional("PANDAREN_WEBHOOK_URL"),
            status_poll_secs: try_load("PANDAREN_STATUS_POLL_SECS", "30"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            info!("{key} not set, order notifications disabled");
            None
        }
    }
}
