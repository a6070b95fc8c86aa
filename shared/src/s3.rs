use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use tracing::debug;

use crate::error::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// The bucket-level operations the handler needs from object storage.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Names of every bucket visible to the caller, first page only.
    async fn list_bucket_names(&self) -> Result<Vec<String>>;

    /// `None` creates the bucket without a `CreateBucketConfiguration`.
    async fn create_bucket(&self, name: &str, location_constraint: Option<String>) -> Result<()>;

    /// Fails with [`StoreError::NoSuchBucket`] when there is nothing to delete.
    async fn delete_bucket(&self, name: &str) -> Result<()>;
}

/// Builds a client bound to `region` on top of the ambient AWS config.
/// An endpoint override (LocalStack, MinIO) switches to path-style addressing.
pub fn client_for_region(sdk_config: &SdkConfig, region: &str, endpoint: Option<&str>) -> aws_sdk_s3::Client {
    let mut builder = aws_sdk_s3::config::Builder::from(sdk_config).region(Region::new(region.to_string()));

    if let Some(endpoint) = endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    aws_sdk_s3::Client::from_conf(builder.build())
}

#[async_trait]
impl BucketStore for aws_sdk_s3::Client {
    async fn list_bucket_names(&self) -> Result<Vec<String>> {
        let output = self
            .list_buckets()
            .send()
            .await
            .map_err(|e| StoreError::from_sdk("ListBuckets", "", e))?;

        let names: Vec<String> = output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect();
        debug!("Buckets listed: {}", names.len());

        Ok(names)
    }

    async fn create_bucket(&self, name: &str, location_constraint: Option<String>) -> Result<()> {
        let mut request = self.create_bucket().bucket(name);

        if let Some(region) = location_constraint {
            let configuration = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region.as_str()))
                .build();
            request = request.create_bucket_configuration(configuration);
        }

        request
            .send()
            .await
            .map_err(|e| StoreError::from_sdk("CreateBucket", name, e))?;

        Ok(())
    }

    async fn delete_bucket(&self, name: &str) -> Result<()> {
        self.delete_bucket()
            .bucket(name)
            .send()
            .await
            .map_err(|e| StoreError::from_sdk("DeleteBucket", name, e))?;

        Ok(())
    }
}
