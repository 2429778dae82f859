//! Configuration module
//!
//! The configuration is read from the process environment exactly once at
//! startup, validated, and then passed by reference into the issuers.
//! Request-handling code never reads ambient environment state.

use std::env;
use std::time::Duration;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// 250 MiB ceiling on declared upload size.
pub const DEFAULT_MAX_VIDEO_SIZE_BYTES: u64 = 250 * 1024 * 1024;
/// Write credentials cover the whole direct upload, so they get a longer window.
pub const DEFAULT_UPLOAD_URL_EXPIRY_SECS: u64 = 3600;
/// Read credentials are re-requested on every playback; keep the window short.
pub const DEFAULT_DOWNLOAD_URL_EXPIRY_SECS: u64 = 600;
/// Bound on any single call to the metadata store or object storage.
pub const DEFAULT_DEPENDENCY_TIMEOUT_SECS: u64 = 10;

/// Application configuration, immutable after startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    // Metadata store
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_seconds: u64,
    // Session verification
    pub jwt_secret: String,
    // Object storage (S3-compatible; endpoint set for R2/MinIO-style providers)
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    // Broker policy
    pub max_video_size_bytes: u64,
    pub upload_url_expiry_secs: u64,
    pub download_url_expiry_secs: u64,
    pub dependency_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_acquire_timeout_seconds: parse_env(
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
            )?,
            jwt_secret: require_env("JWT_SECRET")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "auto".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            max_video_size_bytes: parse_env("MAX_VIDEO_SIZE_BYTES", DEFAULT_MAX_VIDEO_SIZE_BYTES)?,
            upload_url_expiry_secs: parse_env(
                "UPLOAD_URL_EXPIRY_SECS",
                DEFAULT_UPLOAD_URL_EXPIRY_SECS,
            )?,
            download_url_expiry_secs: parse_env(
                "DOWNLOAD_URL_EXPIRY_SECS",
                DEFAULT_DOWNLOAD_URL_EXPIRY_SECS,
            )?,
            dependency_timeout_secs: parse_env(
                "DEPENDENCY_TIMEOUT_SECS",
                DEFAULT_DEPENDENCY_TIMEOUT_SECS,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on misconfiguration before anything else starts.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters long");
        }
        if self.s3_bucket.is_empty() {
            anyhow::bail!("S3_BUCKET must not be empty");
        }
        if self.max_video_size_bytes == 0 {
            anyhow::bail!("MAX_VIDEO_SIZE_BYTES must be greater than zero");
        }
        if self.upload_url_expiry_secs == 0 || self.download_url_expiry_secs == 0 {
            anyhow::bail!("credential expiry windows must be greater than zero");
        }
        if self.dependency_timeout_secs == 0 {
            anyhow::bail!("DEPENDENCY_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn upload_url_expiry(&self) -> Duration {
        Duration::from_secs(self.upload_url_expiry_secs)
    }

    pub fn download_url_expiry(&self) -> Duration {
        Duration::from_secs(self.download_url_expiry_secs)
    }

    pub fn dependency_timeout(&self) -> Duration {
        Duration::from_secs(self.dependency_timeout_secs)
    }
}

fn require_env(name: &str) -> Result<String, anyhow::Error> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable not set", name))
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}
