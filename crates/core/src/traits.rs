//! BucketStore trait definition
//!
//! This trait defines the bucket-level calls the CLI issues against an
//! S3-compatible service. It decouples the commands from the SDK adapter.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BucketAcl, BucketInfo, CorsRule};

/// Bucket administration calls, one method per remote request
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// List all buckets owned by the caller
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// Check if a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create a bucket
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Delete a bucket
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// Get the bucket policy text
    async fn get_bucket_policy(&self, bucket: &str) -> Result<String>;

    /// Replace the bucket policy with the given text
    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;

    /// Remove the bucket policy
    async fn delete_bucket_policy(&self, bucket: &str) -> Result<()>;

    /// Get the bucket access control list
    async fn get_bucket_acl(&self, bucket: &str) -> Result<BucketAcl>;

    /// Get the bucket CORS rules
    async fn get_bucket_cors(&self, bucket: &str) -> Result<Vec<CorsRule>>;

    /// Replace the bucket CORS configuration
    async fn put_bucket_cors(&self, bucket: &str, rules: &[CorsRule]) -> Result<()>;

    /// Remove the bucket CORS configuration
    async fn delete_bucket_cors(&self, bucket: &str) -> Result<()>;
}
