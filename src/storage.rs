use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use aws_config::{defaults, BehaviorVersion};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{Builder as S3ConfigBuilder, Region},
    Client,
};
use aws_smithy_types::byte_stream::ByteStream;
use bytes::Bytes;
use tracing::debug;

use crate::config::{S3Config, SourceConfig};

/// Where the reference CSV files come from.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn fetch(&self, file_name: &str) -> anyhow::Result<Bytes>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads the files from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ReferenceSource for DirSource {
    async fn fetch(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let path = self.root.join(file_name);
        let data = tokio::fs::read(&path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        debug!(path = %path.display(), len = data.len(), "reference file read");
        Ok(Bytes::from(data))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Reads the files from an S3 compatible bucket (MinIO in development).
#[derive(Clone)]
pub struct S3Source {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3Source {
    pub async fn new(cfg: &S3Config) -> anyhow::Result<Self> {
        let shared = defaults(BehaviorVersion::latest())
            .region(Region::new(cfg.region.clone()))
            .credentials_provider(Credentials::new(
                &cfg.access_key,
                &cfg.secret_key,
                None,
                None,
                "static",
            ))
            .endpoint_url(&cfg.endpoint)
            .load()
            .await;

        let conf = S3ConfigBuilder::from(&shared)
            .endpoint_url(&cfg.endpoint)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(conf),
            bucket: cfg.bucket.clone(),
            prefix: cfg.prefix.trim_matches('/').to_string(),
        })
    }

    fn key_for(&self, file_name: &str) -> String {
        object_key(&self.prefix, file_name)
    }
}

fn object_key(prefix: &str, file_name: &str) -> String {
    if prefix.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", prefix, file_name)
    }
}

async fn collect_body(body: ByteStream) -> anyhow::Result<Bytes> {
    let aggregated = body.collect().await.context("s3 read body")?;
    Ok(aggregated.into_bytes())
}

#[async_trait]
impl ReferenceSource for S3Source {
    async fn fetch(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let key = self.key_for(file_name);
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .with_context(|| format!("s3 get_object {}", key))?;
        let data = collect_body(resp.body).await?;
        debug!(bucket = %self.bucket, %key, len = data.len(), "reference object read");
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefix)
    }
}

/// Builds the source named by the configuration.
pub async fn source_from_config(cfg: &SourceConfig) -> anyhow::Result<Box<dyn ReferenceSource>> {
    Ok(match cfg {
        SourceConfig::Dir { path } => Box::new(DirSource::new(path.clone())),
        SourceConfig::S3(s3) => Box::new(S3Source::new(s3).await?),
    })
}
