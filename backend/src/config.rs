use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_API_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_BUTTON_TEXT: &str = "Open mini app";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "{} is not set. Add it to .env or the environment", key),
            Self::Invalid { key, value } => write!(f, "{} has an invalid value: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub mini_app_url: String,
    pub mini_app_button: String,
    pub api_host: IpAddr,
    pub api_port: u16,
    pub telegram_api_url: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;
        let mini_app_url = get("MINI_APP_URL")
            .or_else(|| get("WEB_APP_URL"))
            .or_else(|| get("APP_PUBLIC_URL"))
            .ok_or(ConfigError::Missing("WEB_APP_URL"))?;

        let api_host = match get("API_HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "API_HOST", value })?,
            None => DEFAULT_API_HOST,
        };
        let api_port = match get("API_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "API_PORT", value })?,
            None => DEFAULT_API_PORT,
        };

        Ok(Self {
            bot_token,
            mini_app_url,
            mini_app_button: get("MINI_APP_BUTTON").unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string()),
            api_host,
            api_port,
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        })
    }

    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_lookup(lookup(&[
            ("BOT_TOKEN", "123:abc"),
            ("WEB_APP_URL", "https://gifts.example"),
        ]))
        .unwrap();
        assert_eq!(config.mini_app_url, "https://gifts.example");
        assert_eq!(config.api_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.mini_app_button, DEFAULT_BUTTON_TEXT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
    }

    #[test]
    fn test_mini_app_url_takes_precedence() {
        let config = BotConfig::from_lookup(lookup(&[
            ("BOT_TOKEN", "123:abc"),
            ("WEB_APP_URL", "https://web.example"),
            ("MINI_APP_URL", "https://mini.example"),
            ("API_PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.mini_app_url, "https://mini.example");
        assert_eq!(config.api_port, 9000);
    }

    #[test]
    fn test_missing_and_invalid_values() {
        let err = BotConfig::from_lookup(lookup(&[("WEB_APP_URL", "https://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("BOT_TOKEN")));

        let err = BotConfig::from_lookup(lookup(&[("BOT_TOKEN", "t"), ("MINI_APP_URL", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("WEB_APP_URL")));

        let err = BotConfig::from_lookup(lookup(&[
            ("BOT_TOKEN", "t"),
            ("APP_PUBLIC_URL", "https://x"),
            ("API_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "API_PORT", .. }));
    }
}
