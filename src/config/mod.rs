use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub from_address: String,
    pub subject: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self {
            environment,
            server: ServerConfig {
                port: env::var("HR_API_PORT")
                    .ok()
                    .or_else(|| env::var("PORT").ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                connection_timeout_secs: env::var("DATABASE_CONNECTION_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            security: SecurityConfig {
                jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "self::secret".to_string()),
                jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(24),
            },
            mail: MailConfig {
                from_address: env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "hr-records@localhost".to_string()),
                subject: env::var("MAIL_SUBJECT").unwrap_or_else(|_| "Management APP".to_string()),
            },
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration accessor. Loaded once from the environment on first use.
pub fn config() -> &'static AppConfig {
    &CONFIG
}
