use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub app_name: String,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    /// Falls back to an embedded SQLite database next to the executable, which
    /// is the normal single-user desktop deployment.
    #[must_use]
    pub fn from_env() -> Self {
        dotenv().ok();
        Config {
            db_url: env::var("DB_URL")
                .unwrap_or_else(|_| "sqlite://labrecords.db?mode=rwc".to_string()),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "labrecords".to_string()),
        }
    }
}
