//! Server settings read from the process environment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use stockcast::{Range, StockcastConfig};
use stockcast_yahoo::YahooConfig;
use url::Url;

use crate::error::ServerError;

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// TCP port (`PORT`, default 5001).
    pub port: u16,
    /// Orchestrator settings.
    pub stockcast: StockcastConfig,
    /// Yahoo endpoints and HTTP settings.
    pub yahoo: YahooConfig,
    /// Serve fixture data instead of calling Yahoo.
    pub use_mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            stockcast: StockcastConfig::default(),
            yahoo: YahooConfig::default(),
            use_mock: false,
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment; unset variables keep their defaults.
    ///
    /// # Errors
    /// `ServerError::Config` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// # Errors
    /// `ServerError::Config` when a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = parse(&get, "PORT")? {
            cfg.port = port;
        }
        if let Some(range) = parse::<Range>(&get, "STOCKCAST_FORECAST_LOOKBACK")? {
            cfg.stockcast.forecast_lookback = range;
        }
        if let Some(range) = parse::<Range>(&get, "STOCKCAST_INSIGHTS_LOOKBACK")? {
            cfg.stockcast.insights_lookback = range;
        }
        if let Some(n) = parse(&get, "STOCKCAST_DEFAULT_PERIODS")? {
            cfg.stockcast.default_forecast_periods = n;
        }
        if let Some(n) = parse(&get, "STOCKCAST_MAX_PERIODS")? {
            cfg.stockcast.max_forecast_periods = n;
        }
        if let Some(secs) = parse::<u64>(&get, "STOCKCAST_PROVIDER_TIMEOUT_SECS")? {
            if secs == 0 {
                return Err(ServerError::Config(
                    "STOCKCAST_PROVIDER_TIMEOUT_SECS must be at least 1".to_string(),
                ));
            }
            cfg.stockcast.provider_timeout = Duration::from_secs(secs);
        }
        if let Some(base) = parse_base_url(&get, "STOCKCAST_YAHOO_DOWNLOAD_BASE")? {
            cfg.yahoo = cfg.yahoo.with_download_base(base);
        }
        if let Some(base) = parse_base_url(&get, "STOCKCAST_YAHOO_HISTORY_BASE")? {
            cfg.yahoo = cfg.yahoo.with_history_base(base);
        }
        if let Some(flag) = get("STOCKCAST_USE_MOCK") {
            cfg.use_mock = parse_flag("STOCKCAST_USE_MOCK", &flag)?;
        }
        Ok(cfg)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// `ServerError::Config` when `HOST:PORT` is not a socket address.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ServerError::Config(format!("invalid HOST:PORT {}:{}: {e}", self.host, self.port))
            })
    }
}

fn parse<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ServerError::Config(format!("{key}={raw}: {e}")))
        })
        .transpose()
}

/// An absolute `http(s)` URL that request paths can be joined onto.
fn parse_base_url(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<String>, ServerError> {
    let Some(raw) = get(key) else {
        return Ok(None);
    };
    let base = raw.trim();
    let url = Url::parse(base).map_err(|e| ServerError::Config(format!("{key}={base}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ServerError::Config(format!(
            "{key}={base}: expected an http or https base URL"
        )));
    }
    Ok(Some(base.to_string()))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ServerError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ServerError::Config(format!(
            "{key}={other}: expected true or false"
        ))),
    }
}
