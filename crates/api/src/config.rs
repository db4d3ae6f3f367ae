use std::path::PathBuf;

use chrono::Datelike;

use crate::auth::pin::MaintenancePin;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding one JSON file per location category.
    pub data_dir: PathBuf,
    /// Directory holding marker icon images.
    pub assets_dir: PathBuf,
    /// Maintenance PIN. `None` rejects every protected request.
    pub maintenance_pin: Option<MaintenancePin>,
    /// Years that get a future-cohort map layer and statistics column.
    pub cohort_years: Vec<i32>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `database`                 |
    /// | `ASSETS_DIR`           | `static/images`            |
    /// | `MAINTENANCE_PIN`      | unset                      |
    /// | `FUTURE_COHORT_YEARS`  | current year               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = std::env::var("DATA_DIR")
            .unwrap_or_else(|_| "database".into())
            .into();

        let assets_dir = std::env::var("ASSETS_DIR")
            .unwrap_or_else(|_| "static/images".into())
            .into();

        let maintenance_pin = std::env::var("MAINTENANCE_PIN")
            .ok()
            .and_then(|pin| MaintenancePin::new(&pin));
        if maintenance_pin.is_none() {
            tracing::warn!("MAINTENANCE_PIN not set; maintenance endpoints will reject all requests");
        }

        let cohort_years = match std::env::var("FUTURE_COHORT_YEARS") {
            Ok(raw) => parse_years(&raw).expect("FUTURE_COHORT_YEARS must be comma-separated years"),
            Err(_) => vec![chrono::Local::now().year()],
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            assets_dir,
            maintenance_pin,
            cohort_years,
        }
    }
}

/// Parse a comma-separated year list such as `"2026, 2027"`.
///
/// Blank entries are skipped; duplicates are kept once, in first-seen order.
pub fn parse_years(raw: &str) -> Result<Vec<i32>, String> {
    let mut years = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let year: i32 = part
            .parse()
            .map_err(|_| format!("Invalid year '{part}'"))?;
        if !(1000..=9999).contains(&year) {
            return Err(format!("Year '{part}' must have four digits"));
        }
        if !years.contains(&year) {
            years.push(year);
        }
    }
    Ok(years)
}
