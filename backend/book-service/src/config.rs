/// Configuration management for Book Service
///
/// Everything is read from environment variables. `main` loads a `.env`
/// file first when one is present.
use db_pool::env_utils::{parse_env_list, parse_env_with_default};
use db_pool::DbConfig;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "book-service";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    /// Pool settings; `DATABASE_URL` is redacted in `Debug`
    pub database: DbConfig,
    pub health: HealthConfig,
    pub log: LogConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Host both servers bind to
    pub host: String,
    pub http_port: u16,
    pub grpc_port: u16,
    /// Actix worker count
    pub http_workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` allows any origin
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Period of the gRPC health re-check
    pub check_interval_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }

    pub fn http_bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn grpc_bind_address(&self) -> String {
        format!("{}:{}", self.host, self.grpc_port)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: parse_env_with_default("HTTP_PORT", 8080),
            grpc_port: parse_env_with_default("GRPC_PORT", 50051),
            http_workers: parse_env_with_default("HTTP_WORKERS", 4),
        };

        if app.http_workers == 0 {
            return Err("HTTP_WORKERS must be at least 1".to_string());
        }

        let cors = {
            if app.is_production() && std::env::var("CORS_ALLOWED_ORIGINS").is_err() {
                return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string());
            }

            let allowed_origins = parse_env_list("CORS_ALLOWED_ORIGINS", &["*"]);
            if app.is_production() && allowed_origins.iter().any(|o| o == "*") {
                return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
            }

            CorsConfig { allowed_origins }
        };

        let log = LogConfig {
            format: match std::env::var("LOG_FORMAT") {
                Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        };

        let health = HealthConfig {
            check_interval_secs: parse_env_with_default("HEALTH_CHECK_INTERVAL_SECS", 10),
        };
        if health.check_interval_secs == 0 {
            return Err("HEALTH_CHECK_INTERVAL_SECS must be at least 1".to_string());
        }

        Ok(Config {
            database: DbConfig::from_env(SERVICE_NAME)?,
            health,
            app,
            cors,
            log,
        })
    }
}
