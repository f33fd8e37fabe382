use crate::config::AppConfig;
use crate::db::MemoryStore;
use crate::middleware::RateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub limiter: RateLimiter,
    pub recent_window_days: i64,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            store: MemoryStore::new(),
            limiter: RateLimiter::new(config.rate_limit_max_requests, config.rate_limit_window_secs),
            recent_window_days: config.recent_window_days,
        }
    }
}

pub type SharedState = Arc<AppState>;
