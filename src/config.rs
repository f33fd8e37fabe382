use crate::error::ConfigError;
use std::ops::RangeInclusive;

/// Up to a century; anything wider does not fit a timestamp offset.
pub const RECENT_WINDOW_DAYS_RANGE: RangeInclusive<i64> = 1..=36_500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    pub recent_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            rate_limit_max_requests: 30,
            rate_limit_window_secs: 60,
            recent_window_days: 7,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| {
            let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
            format!("0.0.0.0:{}", port)
        });

        Ok(Self {
            bind_addr,
            rate_limit_max_requests: parse(
                &lookup,
                "RATE_LIMIT_MAX_REQUESTS",
                defaults.rate_limit_max_requests,
            )?,
            rate_limit_window_secs: parse(
                &lookup,
                "RATE_LIMIT_WINDOW_SECS",
                defaults.rate_limit_window_secs,
            )?,
            recent_window_days: parse_within(
                &lookup,
                "RECENT_WINDOW_DAYS",
                defaults.recent_window_days,
                RECENT_WINDOW_DAYS_RANGE,
            )?,
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_within<T, F>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + ToString,
    F: Fn(&str) -> Option<String>,
{
    let value = parse(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}
