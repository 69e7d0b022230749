//! Server configuration from environment variables
//!
//! ## Environment
//! - `VOLLEY_HOST`: bind host, an IP or a resolvable name such as `localhost` (default `127.0.0.1`)
//! - `VOLLEY_PORT`: bind port (default `3000`)
//! - `VOLLEY_REQUIRE_AUTH`: enforce bearer tokens on `POST /api/stats` (default off)
//! - `VOLLEY_JWT_SECRET`: token signing secret, at least 32 chars (random per process if unset)
//! - `VOLLEY_USERS`: comma-separated `user:password` pairs (default `admin:admin`)
//! - `VOLLEY_TOKEN_TTL`: access token lifetime in seconds (default 3600)

use std::collections::HashMap;

use uuid::Uuid;

/// Minimum accepted length for a signing secret
pub const MIN_SECRET_LEN: usize = 32;

/// Runtime settings for the stats server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When false the sign-in gate is cosmetic and the API accepts anonymous writes
    pub require_auth: bool,
    pub jwt_secret: String,
    /// (username, password) pairs allowed to sign in
    pub users: Vec<(String, String)>,
    pub token_ttl: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            require_auth: false,
            jwt_secret: generate_secret(),
            users: vec![("admin".to_string(), "admin".to_string())],
            token_ttl: 3600,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidSecret(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSecret(msg) => write!(f, "Invalid secret: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("VOLLEY_"))
            .collect();
        Self::from_vars(&vars)
    }

    /// Load configuration from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = vars.get("VOLLEY_HOST") {
            config.host = host.trim().to_string();
        }

        if let Some(port) = vars.get("VOLLEY_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid VOLLEY_PORT"),
            }
        }

        if let Some(flag) = vars.get("VOLLEY_REQUIRE_AUTH") {
            config.require_auth = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(secret) = vars.get("VOLLEY_JWT_SECRET") {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::InvalidSecret(format!(
                    "VOLLEY_JWT_SECRET must be at least {} characters",
                    MIN_SECRET_LEN
                )));
            }
            config.jwt_secret = secret.clone();
        } else {
            tracing::debug!("VOLLEY_JWT_SECRET not set, using a per-process secret");
        }

        if let Some(ttl) = vars.get("VOLLEY_TOKEN_TTL") {
            match ttl.trim().parse::<i64>() {
                Ok(seconds) if seconds > 0 => config.token_ttl = seconds,
                _ => tracing::warn!(value = %ttl, "Ignoring invalid VOLLEY_TOKEN_TTL"),
            }
        }

        // Format: "user1:pass1,user2:pass2"
        if let Some(users) = vars.get("VOLLEY_USERS") {
            let parsed = parse_users(users);
            if parsed.is_empty() {
                tracing::warn!("VOLLEY_USERS has no valid entries, keeping default admin user");
            } else {
                config.users = parsed;
            }
        } else {
            tracing::warn!("No users configured, adding default admin:admin");
        }

        Ok(config)
    }

    /// Bind a listener on the configured host and port.
    ///
    /// The host goes through name resolution, so `localhost` works as well
    /// as a literal IP.
    pub async fn bind(&self) -> std::io::Result<tokio::net::TcpListener> {
        tokio::net::TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

fn parse_users(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| {
            let (user, pass) = entry.trim().split_once(':')?;
            if user.is_empty() || pass.is_empty() {
                tracing::warn!(entry = %entry.trim(), "Skipping malformed VOLLEY_USERS entry");
                return None;
            }
            Some((user.to_string(), pass.to_string()))
        })
        .collect()
}

/// 64 hex chars from two v4 UUIDs
fn generate_secret() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(!config.require_auth);
        assert!(config.jwt_secret.len() >= MIN_SECRET_LEN);
        assert_eq!(config.users, vec![("admin".to_string(), "admin".to_string())]);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(&vars(&[
            ("VOLLEY_HOST", "0.0.0.0"),
            ("VOLLEY_PORT", "8080"),
            ("VOLLEY_REQUIRE_AUTH", "TRUE"),
            ("VOLLEY_USERS", "coach:whistle, scout:notes"),
            ("VOLLEY_TOKEN_TTL", "60"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.require_auth);
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[1], ("scout".to_string(), "notes".to_string()));
        assert_eq!(config.token_ttl, 60);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_vars(&vars(&[
            ("VOLLEY_PORT", "not-a-port"),
            ("VOLLEY_TOKEN_TTL", "-5"),
            ("VOLLEY_USERS", "broken,:nopass"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.token_ttl, 3600);
        assert_eq!(config.users[0].0, "admin");
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = ServerConfig::from_vars(&vars(&[("VOLLEY_JWT_SECRET", "short")]));
        assert!(matches!(result, Err(ConfigError::InvalidSecret(_))));
    }

    #[tokio::test]
    async fn test_binds_host_name() {
        let config =
            ServerConfig::from_vars(&vars(&[("VOLLEY_HOST", "localhost"), ("VOLLEY_PORT", "0")]))
                .unwrap();
        let listener = config.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bad_host_rejected() {
        let config =
            ServerConfig::from_vars(&vars(&[("VOLLEY_HOST", "not a host"), ("VOLLEY_PORT", "0")]))
                .unwrap();
        assert!(config.bind().await.is_err());
    }
}
