//! Configuration management

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "server.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid PORTFOLIO_PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Get config directory (PORTFOLIO_CONFIG_DIR or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/portfolio-web");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("portfolio-web");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/portfolio-web");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("portfolio-web");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Load configuration: `server.json` from the config dir when present,
/// defaults otherwise, then env overrides (PORTFOLIO_PORT, PORTFOLIO_HOST).
pub fn load_config() -> Result<Config, ConfigError> {
    let path = get_config_dir().join(CONFIG_FILE);

    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?
    } else {
        Config::default()
    };

    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        config.port = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }
    if let Ok(host) = std::env::var("PORTFOLIO_HOST") {
        config.host = host;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("PORTFOLIO_CONFIG_DIR");
        env::remove_var("PORTFOLIO_PORT");
        env::remove_var("PORTFOLIO_HOST");
    }

    #[test]
    #[serial]
    fn defaults_when_no_file_exists() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");

        clear_env();
    }

    #[test]
    #[serial]
    fn file_values_are_read() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"port": 9090}"#).expect("write config");
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0", "missing fields keep defaults");

        clear_env();
    }

    #[test]
    #[serial]
    fn env_overrides_win_over_file() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"port": 9090}"#).expect("write config");
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORTFOLIO_PORT", "7070");
        env::set_var("PORTFOLIO_HOST", "127.0.0.1");

        let config = load_config().expect("config should load");
        assert_eq!(config.port, 7070);
        assert_eq!(config.host, "127.0.0.1");

        clear_env();
    }

    #[test]
    #[serial]
    fn malformed_port_env_is_an_error() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());
        env::set_var("PORTFOLIO_PORT", "not-a-port");

        let result = load_config();
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn malformed_file_is_an_error() {
        clear_env();
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "{ nope").expect("write config");
        env::set_var("PORTFOLIO_CONFIG_DIR", dir.path());

        let result = load_config();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        clear_env();
    }
}
