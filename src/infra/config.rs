use serde::{Deserialize, Serialize};

pub const DEFAULT_SECRET_KEY: &str = "replace_with_a_random_secret_key";
pub const DEFAULT_COOKIE_NAME: &str = "session";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "users.db".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_path: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_path: "./logs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
    pub public_dir: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            address: "0.0.0.0:5000".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret_key: String,
    /// Secure, cross-site cookies instead of lax ones.
    pub production: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            production: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// `BASE_CONFIG` file (if set) or defaults, then environment overrides.
    pub fn load() -> anyhow::Result<AppConfig> {
        let mut config = match std::env::var("BASE_CONFIG") {
            Ok(path) => AppConfig::from_file(path)?,
            Err(_) => AppConfig::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST");
        let port = lookup("PORT")
            .map(|port| port.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;
        if host.is_some() || port.is_some() {
            let (current_host, current_port) = match self.application.address.rsplit_once(':') {
                Some((h, p)) => (h.to_string(), p.to_string()),
                None => (self.application.address.clone(), "5000".to_string()),
            };
            let host = host.unwrap_or(current_host);
            let port = port.map(|port| port.to_string()).unwrap_or(current_port);
            self.application.address = format!("{}:{}", host, port);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.application.allow_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(public_dir) = lookup("PUBLIC_DIR") {
            self.application.public_dir = public_dir;
        }
        if let Some(secret_key) = lookup("SECRET_KEY") {
            self.session.secret_key = secret_key;
        }
        if let Some(cookie_name) = lookup("SESSION_COOKIE_NAME") {
            self.session.cookie_name = cookie_name;
        }
        if let Some(prod) = lookup("PROD") {
            self.session.production = matches!(prod.as_str(), "1" | "true" | "True");
        }
        if let Some(path) = lookup("SQLITE_PATH") {
            self.db.path = path;
        }
        if let Some(log_path) = lookup("LOG_PATH") {
            self.logger.log_path = log_path;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[rstest]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.application.address, "0.0.0.0:5000");
        assert_eq!(config.session.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(config.db.path, "users.db");
        assert!(!config.session.production);
        assert!(config.application.allow_origins.is_empty());
    }

    #[rstest]
    fn test_env_overrides() {
        let vars = env(&[
            ("PORT", "8080"),
            ("SECRET_KEY", "s3cr3t"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("PROD", "True"),
            ("SQLITE_PATH", "/var/lib/accounts.db"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.application.address, "0.0.0.0:8080");
        assert_eq!(config.session.secret_key, "s3cr3t");
        assert_eq!(
            config.application.allow_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(config.session.production);
        assert_eq!(config.db.path, "/var/lib/accounts.db");
    }

    #[rstest]
    #[case("1", true)]
    #[case("true", true)]
    #[case("0", false)]
    #[case("yes", false)]
    fn test_prod_flag(#[case] value: &str, #[case] expected: bool) {
        let vars = env(&[("PROD", value)]);
        let mut config = AppConfig::default();
        config.apply_env(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.session.production, expected);
    }

    #[rstest]
    fn test_invalid_port_is_rejected() {
        let vars = env(&[("PORT", "http")]);
        let mut config = AppConfig::default();
        assert!(config.apply_env(|key| vars.get(key).cloned()).is_err());
    }

    #[rstest]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
                [application]
                address = "127.0.0.1:3000"

                [session]
                production = true
            "#,
        )
        .unwrap();

        assert_eq!(config.application.address, "127.0.0.1:3000");
        assert!(config.session.production);
        assert_eq!(config.session.cookie_name, DEFAULT_COOKIE_NAME);
        assert_eq!(config.db.max_connections, 5);
    }
}
