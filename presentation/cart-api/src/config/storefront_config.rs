use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Storefront API access (stock and catalog)
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_URL: Base URL of the storefront API (default: "http://localhost:3333")
    /// - STOREFRONT_TIMEOUT_SECS: Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());
        let timeout = parse_timeout(env::var("STOREFRONT_TIMEOUT_SECS").ok().as_deref());

        Self { base_url, timeout }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_timeout_seconds() {
        assert_eq!(parse_timeout(Some("3")), Duration::from_secs(3));
    }

    #[test]
    fn should_fall_back_to_default_timeout() {
        let default = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        assert_eq!(parse_timeout(None), default);
        assert_eq!(parse_timeout(Some("soon")), default);
        assert_eq!(parse_timeout(Some("0")), default);
    }
}
