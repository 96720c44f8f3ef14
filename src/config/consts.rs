// src/config/consts.rs

// Remote service
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const API_BASE_ENV: &str = "PP_API_BASE";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Scrape polling
pub const POLL_INTERVAL_MS: u64 = 2000;
// Sleep in slices so teardown never waits out a full interval
pub const POLL_SLICE_MS: u64 = 50;

/// Remote base URL: env override, else the local default.
/// Trailing slashes are stripped so path joins stay clean.
pub fn api_base() -> String {
    std::env::var(API_BASE_ENV)
        .ok()
        .map(|v| s!(v.trim().trim_end_matches('/')))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| s!(DEFAULT_API_BASE))
}
