//! Configuration module
//!
//! Application configuration is read once at startup from the environment
//! (with `.env` support via dotenvy) and passed explicitly into construction.
//! Nothing in the pipeline reads environment variables ambiently.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::constants::{DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_MAX_UPLOAD_SIZE_BYTES};

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const MIN_JWT_SECRET_LEN: usize = 32;

/// Object-storage backend selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            other => bail!("Unknown storage backend: {other} (expected 's3' or 'local')"),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Postgres connection URL
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Shared secret for signing and verifying bearer tokens
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    /// Object-storage backend
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    /// Public distribution base composed with storage keys to form playback URLs
    pub distribution_base_url: String,
    pub max_upload_size_bytes: usize,
    /// Content-type allow-list for the upload endpoint
    pub allowed_content_types: Vec<String>,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub environment: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_csv(key: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(v) => v
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is required")?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET is required")?,
            jwt_expiry_hours: env_parse("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS),
            storage_backend: env_or("STORAGE_BACKEND", "s3").parse()?,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            distribution_base_url: env::var("CDN_DISTRIBUTION_URL")
                .context("CDN_DISTRIBUTION_URL is required")?
                .trim_end_matches('/')
                .to_string(),
            max_upload_size_bytes: env_parse(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            ),
            allowed_content_types: env_csv(
                "VIDEO_ALLOWED_CONTENT_TYPES",
                DEFAULT_ALLOWED_CONTENT_TYPES,
            ),
            ffmpeg_path: env_or("FFMPEG_PATH", "ffmpeg"),
            ffprobe_path: env_or("FFPROBE_PATH", "ffprobe"),
            environment: env_or("ENVIRONMENT", "development"),
        };

        Ok(config)
    }

    /// Validate the configuration. Called once at startup so misconfiguration
    /// fails fast instead of surfacing mid-request.
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters",
                MIN_JWT_SECRET_LEN
            );
        }

        if self.max_upload_size_bytes == 0 {
            bail!("MAX_UPLOAD_SIZE_BYTES must be greater than zero");
        }

        if self.allowed_content_types.is_empty() {
            bail!("VIDEO_ALLOWED_CONTENT_TYPES must not be empty");
        }

        if self.distribution_base_url.is_empty() {
            bail!("CDN_DISTRIBUTION_URL must not be empty");
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    bail!("S3_BUCKET is required when STORAGE_BACKEND=s3");
                }
                if self.s3_region.is_none() {
                    bail!("S3_REGION is required when STORAGE_BACKEND=s3");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    bail!("LOCAL_STORAGE_PATH is required when STORAGE_BACKEND=local");
                }
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
