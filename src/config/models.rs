use serde::Deserialize;
use std::fmt;
use validator::Validate;

pub const DEFAULT_API_URL: &str = "https://pddimp.yandex.ru";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RECORD_TTL: u32 = 3600;

#[derive(Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Only ever taken from the environment.
    #[serde(skip)]
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[validate(url(message = "API URL must be a valid URL"))]
    pub api_url: String,

    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    pub request_timeout_secs: u64,

    #[validate(range(min = 1, message = "TTL must be greater than 0"))]
    pub record_ttl: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            record_ttl: DEFAULT_RECORD_TTL,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("record_ttl", &self.record_ttl)
            .finish()
    }
}
