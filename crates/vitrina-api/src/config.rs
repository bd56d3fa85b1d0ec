//! Server configuration.
//!
//! All settings load from `VITRINA_*` environment variables with sensible
//! development defaults; a variable that is present but unparseable is an
//! error rather than a silent fallback.

use serde::{Deserialize, Serialize};

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins. Empty means "allow any origin" (development
    /// posture).
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight caching, in seconds.
    #[serde(default)]
    pub max_age_seconds: u64,
}

/// Configuration for the Vitrina API server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port.
    pub http_port: u16,

    /// Enable debug mode. When enabled, logs are pretty-printed instead of
    /// JSON.
    pub debug: bool,

    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,

    /// Optional concurrency limit for the catalog router.
    #[serde(default)]
    pub concurrency_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            debug: true,
            cors: CorsConfig::default(),
            concurrency_limit: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Recognized variables:
    ///
    /// - `VITRINA_HTTP_PORT` - HTTP port (default 3000)
    /// - `VITRINA_DEBUG` - `true`/`false` (default true)
    /// - `VITRINA_CORS_ALLOWED_ORIGINS` - comma-separated origin list
    /// - `VITRINA_CORS_MAX_AGE_SECONDS` - preflight cache lifetime
    /// - `VITRINA_CONCURRENCY_LIMIT` - max in-flight catalog requests
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(port) = env_u16("VITRINA_HTTP_PORT")? {
            config.http_port = port;
        }
        if let Some(debug) = env_bool("VITRINA_DEBUG")? {
            config.debug = debug;
        }
        if let Some(origins) = env_string("VITRINA_CORS_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(max_age) = env_u64("VITRINA_CORS_MAX_AGE_SECONDS")? {
            config.cors.max_age_seconds = max_age;
        }
        if let Some(limit) = env_u64("VITRINA_CONCURRENCY_LIMIT")? {
            config.concurrency_limit = Some(usize::try_from(limit)?);
        }

        Ok(config)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_u16(name: &str) -> anyhow::Result<Option<u16>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    let parsed = v
        .parse::<u16>()
        .map_err(|e| anyhow::anyhow!("{name} must be a port number: {e}"))?;
    Ok(Some(parsed))
}

fn env_u64(name: &str) -> anyhow::Result<Option<u64>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    let parsed = v
        .parse::<u64>()
        .map_err(|e| anyhow::anyhow!("{name} must be a non-negative integer: {e}"))?;
    Ok(Some(parsed))
}

fn env_bool(name: &str) -> anyhow::Result<Option<bool>> {
    let Some(v) = env_string(name) else {
        return Ok(None);
    };
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(Some(true)),
        "0" | "false" | "no" => Ok(Some(false)),
        other => Err(anyhow::anyhow!("{name} must be a boolean, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http_port, 3000);
        assert!(config.debug);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.concurrency_limit.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            http_port: 8080,
            debug: false,
            cors: CorsConfig {
                allowed_origins: vec!["https://shop.example.com".to_string()],
                max_age_seconds: 600,
            },
            concurrency_limit: Some(128),
        };
        let json = serde_json::to_string(&config).expect("serialization failed");
        let parsed: Config = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed, config);
    }
}
