use std::path::Path;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use framework::fs::path::PathExt;
use tracing::info;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()>;
}

pub struct S3 {
    client: Client,
}

impl S3 {
    pub fn new(config: &SdkConfig) -> Self {
        S3 {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3 {
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()> {
        info!("upload file, path={}, bucket={bucket}, key={key}", path.to_string_lossy());

        let body = ByteStream::from_path(path)
            .await
            .with_context(|| format!("failed to open upload file, path={}", path.to_string_lossy()))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(path.content_type())
            .body(body)
            .send()
            .await
            .map_err(|err| anyhow!("failed to put object, bucket={bucket}, key={key}, error={}", DisplayErrorContext(&err)))?;

        Ok(())
    }
}

pub fn object_url(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}
