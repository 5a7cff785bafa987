//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Where the verification backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Upper bound for each network call of a run.
    pub request_timeout: Duration,
    /// Upper bound for establishing a connection.
    pub connect_timeout: Duration,
    /// Where the UI is sent after a successful signup.
    pub login_destination: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            login_destination: "login.html".to_string(),
        }
    }
}

impl BackendConfig {
    /// Build from `KYC_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("KYC_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let request_timeout = match lookup("KYC_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_secs("KYC_REQUEST_TIMEOUT_SECS", &raw)?,
            None => defaults.request_timeout,
        };

        let connect_timeout = match lookup("KYC_CONNECT_TIMEOUT_SECS") {
            Some(raw) => parse_secs("KYC_CONNECT_TIMEOUT_SECS", &raw)?,
            None => defaults.connect_timeout,
        };

        let login_destination =
            lookup("KYC_LOGIN_DESTINATION").unwrap_or(defaults.login_destination);

        Ok(Self {
            base_url,
            request_timeout,
            connect_timeout,
            login_destination,
        })
    }

    /// Absolute URL for a backend path such as `/register`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn parse_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("expected a whole number of seconds, got {raw:?}"),
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = BackendConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.login_destination, "login.html");
    }

    #[test]
    fn overrides_and_trims_trailing_slash() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            ("KYC_BACKEND_URL", "https://kyc.example.com/"),
            ("KYC_REQUEST_TIMEOUT_SECS", "5"),
            ("KYC_LOGIN_DESTINATION", "/login"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://kyc.example.com");
        assert_eq!(config.endpoint("/register"), "https://kyc.example.com/register");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.login_destination, "/login");
    }

    #[test]
    fn rejects_bad_timeouts() {
        let err = BackendConfig::from_lookup(lookup_from(&[("KYC_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("KYC_REQUEST_TIMEOUT_SECS"));

        let err = BackendConfig::from_lookup(lookup_from(&[("KYC_CONNECT_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
