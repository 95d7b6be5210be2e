use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_ROUTE: &str = "http://localhost:3001/api";
const DEFAULT_SESSION_FILE: &str = ".evently-session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub api_route: String,
    pub session_file: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let timeout_secs = env::var("EVENTLY_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_route: env::var("EVENTLY_API_ROUTE")
                .unwrap_or_else(|_| DEFAULT_API_ROUTE.to_string()),
            session_file: env::var("EVENTLY_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn new(api_route: impl Into<String>) -> Self {
        Self {
            api_route: api_route.into(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
