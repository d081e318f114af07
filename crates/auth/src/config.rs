use std::time::Duration;

const DEFAULT_SESSION_TTL_DAYS: u64 = 7;

/// Auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: days(DEFAULT_SESSION_TTL_DAYS),
            cookie_name: "session".to_string(),
            cookie_secure: true,
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_TTL_DAYS`: Session TTL in days (default: 7)
    /// - `COOKIE_SECURE`: Whether to set secure flag on cookies (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SESSION_TTL_DAYS").ok().as_deref(),
            std::env::var("COOKIE_SECURE").ok().as_deref(),
        )
    }

    fn from_vars(ttl_days: Option<&str>, cookie_secure: Option<&str>) -> Self {
        let defaults = Self::default();

        let session_ttl = ttl_days
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|d| *d > 0)
            .map(days)
            .unwrap_or(defaults.session_ttl);

        let cookie_secure = cookie_secure
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.cookie_secure);

        Self {
            session_ttl,
            cookie_secure,
            ..defaults
        }
    }

    /// Session TTL as a chrono duration, for expiry arithmetic.
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl.as_secs() as i64)
    }
}

fn days(n: u64) -> Duration {
    Duration::from_secs(n * 24 * 60 * 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = AuthConfig::from_vars(None, None);
        assert_eq!(config.session_ttl, days(7));
        assert_eq!(config.cookie_name, "session");
        assert!(config.cookie_secure);
    }

    #[test]
    fn reads_ttl_and_cookie_flag() {
        let config = AuthConfig::from_vars(Some("30"), Some("false"));
        assert_eq!(config.session_ttl, days(30));
        assert!(!config.cookie_secure);

        let config = AuthConfig::from_vars(None, Some("1"));
        assert!(config.cookie_secure);
    }

    #[test]
    fn invalid_ttl_falls_back_to_default() {
        assert_eq!(AuthConfig::from_vars(Some("soon"), None).session_ttl, days(7));
        assert_eq!(AuthConfig::from_vars(Some("0"), None).session_ttl, days(7));
    }

    #[test]
    fn chrono_ttl_matches() {
        let config = AuthConfig::from_vars(Some("1"), None);
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::days(1));
    }
}
