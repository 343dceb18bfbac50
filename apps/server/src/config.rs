use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use finboard_core::constants::DEFAULT_USER_ID;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub seed_sample_data: bool,
    /// User the settings endpoints read and write.
    pub default_user: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            seed_sample_data: true,
            default_user: DEFAULT_USER_ID.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let raw_addr = env_or("FB_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid FB_LISTEN_ADDR '{}'", raw_addr))?;
        let cors_allow = env_or("FB_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("FB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let seed_sample_data = parse_flag(&env_or("FB_SEED_SAMPLE_DATA", "true"));
        let default_user = env_or("FB_DEFAULT_USER", DEFAULT_USER_ID);
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            seed_sample_data,
            default_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" off "));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.default_user, "default_user");
        assert!(config.seed_sample_data);
    }
}
