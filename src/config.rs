use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Config {
    // Endpoints
    pub trading_deals_url: String,
    pub deals_url: String,
    pub stats_url: String,

    /// Zone in which "today" is taken for new deals.
    pub timezone: Tz,

    /// Serve everything from the in-memory backend instead of the endpoints.
    pub offline: bool,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            trading_deals_url: env("TRADING_DEALS_URL", "http://localhost:8080/trading-deals"),
            deals_url: env("DEALS_URL", "http://localhost:8080/deals"),
            stats_url: env("STATS_URL", "http://localhost:8080/stats"),
            timezone: env("DESK_TIMEZONE", "UTC").parse().unwrap_or(Tz::UTC),
            offline: env("DESK_OFFLINE", "false").to_lowercase() == "true",
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    /// Current calendar date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        today_in(self.timezone)
    }
}

pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}
