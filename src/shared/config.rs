use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// Application configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub default_page_size: u32,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_size: u32,
    pub min_idle: u32,
    pub connection_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig::from_env()?;
        let default_page_size = match env::var("DEFAULT_PAGE_SIZE") {
            Ok(raw) => raw.trim().parse::<u32>()?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        if default_page_size == 0 || default_page_size > MAX_PAGE_SIZE {
            return Err(AppError::ConfigError(format!(
                "DEFAULT_PAGE_SIZE must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            database,
            default_page_size,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;

        let (default_max, default_min) = Self::optimal_pool_size();
        let max_size = read_u32("DATABASE_MAX_CONNECTIONS")?.unwrap_or(default_max);
        let min_idle = read_u32("DATABASE_MIN_IDLE")?.unwrap_or(default_min);
        let timeout = read_u32("DATABASE_CONNECT_TIMEOUT_SECS")?
            .map(u64::from)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Self::new(url, max_size, min_idle, Duration::from_secs(timeout))
    }

    pub fn new(
        url: String,
        max_size: u32,
        min_idle: u32,
        connection_timeout: Duration,
    ) -> AppResult<Self> {
        Self::validate_url(&url)?;

        if max_size == 0 {
            return Err(AppError::ConfigError(
                "DATABASE_MAX_CONNECTIONS must be positive".to_string(),
            ));
        }

        Ok(Self {
            url,
            max_size,
            // Pool refuses min_idle above max_size
            min_idle: min_idle.min(max_size),
            connection_timeout,
        })
    }

    /// Basic format and safety checks on the connection URL
    fn validate_url(url: &str) -> AppResult<()> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        if url.contains("password=") || url.len() < 20 {
            return Err(AppError::ConfigError(
                "Database URL appears to be malformed or insecure".to_string(),
            ));
        }

        Ok(())
    }

    /// Host part of the URL, safe to log
    pub fn redacted_host(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }

    fn optimal_pool_size() -> (u32, u32) {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let max_size = std::cmp::min(cpu_count * 2, 20);
        let min_idle = std::cmp::max(2, max_size / 4);

        log_info!(
            "Derived pool size from {} CPUs: max_size={}, min_idle={}",
            cpu_count,
            max_size,
            min_idle
        );

        (max_size as u32, min_idle as u32)
    }
}

fn read_u32(key: &str) -> AppResult<Option<u32>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| AppError::ConfigError(format!("{} is not a valid number: {}", key, e))),
        Err(_) => Ok(None),
    }
}
