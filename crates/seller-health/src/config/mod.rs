use crate::health::{HealthWeights, WeightsError};
use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub weights: HealthWeights,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = env::var("APP_LOG_ANSI")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let weights = match env::var_os("SELLER_HEALTH_WEIGHTS") {
            Some(path) => load_weights(Path::new(&path))?,
            None => HealthWeights::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, ansi },
            weights,
        })
    }
}

/// Read a JSON weights override. Fields it omits keep their defaults.
pub fn load_weights(path: &Path) -> Result<HealthWeights, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::WeightsUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let weights =
        HealthWeights::from_json(&raw).map_err(|source| ConfigError::WeightsMalformed {
            path: path.to_path_buf(),
            source,
        })?;
    weights.validate().map_err(ConfigError::InvalidWeights)?;
    Ok(weights)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    WeightsUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    WeightsMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidWeights(WeightsError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::WeightsUnreadable { path, .. } => {
                write!(f, "unable to read weights file {}", path.display())
            }
            ConfigError::WeightsMalformed { path, source } => {
                write!(f, "weights file {} is not valid JSON: {}", path.display(), source)
            }
            ConfigError::InvalidWeights(err) => write!(f, "invalid health weights: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::WeightsUnreadable { source, .. } => Some(source),
            ConfigError::WeightsMalformed { source, .. } => Some(source),
            ConfigError::InvalidWeights(err) => Some(err),
        }
    }
}
