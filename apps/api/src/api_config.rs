use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use roster_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Backing store selected for employee records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackendConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub store: StoreBackendConfig,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let store = match env::var("EMPLOYEE_STORE")
            .unwrap_or_else(|_| "postgres".to_owned())
            .as_str()
        {
            "postgres" => {
                let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
                    Ok(value) => value.parse::<u32>().map_err(|error| {
                        AppError::Validation(format!("invalid DATABASE_MAX_CONNECTIONS: {error}"))
                    })?,
                    Err(_) => DEFAULT_MAX_CONNECTIONS,
                };
                StoreBackendConfig::Postgres {
                    database_url: required_non_empty_env("DATABASE_URL")?,
                    max_connections,
                }
            }
            "memory" => StoreBackendConfig::Memory,
            other => {
                return Err(AppError::Validation(format!(
                    "EMPLOYEE_STORE must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        if migrate_only && store == StoreBackendConfig::Memory {
            return Err(AppError::Validation(
                "the migrate command requires EMPLOYEE_STORE=postgres".to_owned(),
            ));
        }

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        Ok(Self {
            migrate_only,
            store,
            frontend_url,
            api_host,
            api_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, StoreBackendConfig};

    #[test]
    fn socket_address_combines_host_and_port() {
        let config = ApiConfig {
            migrate_only: false,
            store: StoreBackendConfig::Memory,
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: "0.0.0.0".to_owned(),
            api_port: 8080,
        };

        assert_eq!(
            config.socket_address().map(|address| address.to_string()).ok(),
            Some("0.0.0.0:8080".to_owned())
        );
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        let config = ApiConfig {
            migrate_only: false,
            store: StoreBackendConfig::Memory,
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: "localhost".to_owned(),
            api_port: 8080,
        };

        assert!(config.socket_address().is_err());
    }
}
