use std::env;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://customers.db?mode=rwc";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUCCESS_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Upper bound for the bulk customer read and the start-up connection check
    pub query_timeout: Duration,
    /// How long the edit flow keeps its success message up before closing
    pub success_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            query_timeout: Duration::from_secs(parse_or(
                &lookup,
                "QUERY_TIMEOUT_SECS",
                DEFAULT_QUERY_TIMEOUT_SECS,
            )),
            success_delay: Duration::from_millis(parse_or(
                &lookup,
                "SUCCESS_DELAY_MS",
                DEFAULT_SUCCESS_DELAY_MS,
            )),
        }
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}
