use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recommendations returned when a request does not set a limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound on any requested limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_limit == 0 {
            anyhow::bail!("MAX_LIMIT must be at least 1");
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            anyhow::bail!(
                "DEFAULT_LIMIT must be between 1 and MAX_LIMIT ({}), got {}",
                self.max_limit,
                self.default_limit
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let vars: Vec<(String, String)> = Vec::new();
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("DEFAULT_LIMIT".to_string(), "5".to_string()),
            ("LOG_JSON".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_limit, 5);
        assert!(config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_limit_above_max_is_rejected() {
        let config = Config {
            default_limit: 60,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
