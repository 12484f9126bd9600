use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    pub endpoint: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub enum SourceConfig {
    Dir { path: PathBuf },
    S3(S3Config),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub source: SourceConfig,
    /// Seed for the shared menu random source; entropy when unset.
    pub menu_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("APP_PORT must be a port number")?;

        let source = match std::env::var("REFERENCE_SOURCE")
            .unwrap_or_else(|_| "dir".into())
            .as_str()
        {
            "dir" => SourceConfig::Dir {
                path: std::env::var("REFERENCE_DIR")
                    .unwrap_or_else(|_| "./data".into())
                    .into(),
            },
            "s3" => SourceConfig::S3(S3Config {
                endpoint: std::env::var("S3_ENDPOINT").context("S3_ENDPOINT")?,
                bucket: std::env::var("S3_BUCKET").context("S3_BUCKET")?,
                access_key: std::env::var("S3_ACCESS_KEY").context("S3_ACCESS_KEY")?,
                secret_key: std::env::var("S3_SECRET_KEY").context("S3_SECRET_KEY")?,
                region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into()),
                prefix: std::env::var("S3_PREFIX").unwrap_or_else(|_| "data".into()),
            }),
            other => anyhow::bail!("unknown REFERENCE_SOURCE `{}` (expected dir or s3)", other),
        };

        let menu_seed = match std::env::var("MENU_SEED") {
            Ok(v) => Some(v.parse::<u64>().context("MENU_SEED must be an unsigned integer")?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            source,
            menu_seed,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
