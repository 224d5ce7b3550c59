//! Bucket operations that do more than forward one call
//!
//! Most commands map straight onto a [`BucketStore`] method. The functions
//! here add local work around the remote call: validating a policy file
//! before upload, waiting for a bucket to appear or disappear, and building
//! the fixed CORS rule.

use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::policy::PolicyDocument;
use crate::traits::BucketStore;
use crate::types::CorsRule;

/// Maximum number of existence checks while waiting on a bucket
pub const DEFAULT_WAIT_ATTEMPTS: u32 = 20;

/// Pause between existence checks
pub const DEFAULT_WAIT_DELAY: Duration = Duration::from_secs(5);

/// Bounds for the post-create / post-delete wait
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_WAIT_ATTEMPTS,
            delay: DEFAULT_WAIT_DELAY,
        }
    }
}

/// State a bucket is expected to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketState {
    Exists,
    NotExists,
}

impl BucketState {
    fn describe(self) -> &'static str {
        match self {
            BucketState::Exists => "created",
            BucketState::NotExists => "deleted",
        }
    }
}

/// Poll until the bucket reaches `state`
///
/// The first check runs immediately. `on_attempt` is called before each
/// check with the 1-based attempt number. Returns the number of checks made.
pub async fn wait_for_bucket(
    store: &dyn BucketStore,
    bucket: &str,
    state: BucketState,
    options: WaitOptions,
    mut on_attempt: impl FnMut(u32),
) -> Result<u32> {
    let want = state == BucketState::Exists;

    for attempt in 1..=options.max_attempts {
        on_attempt(attempt);
        let exists = store.bucket_exists(bucket).await?;
        tracing::debug!(bucket, attempt, exists, "Checked bucket existence");

        if exists == want {
            return Ok(attempt);
        }

        if attempt < options.max_attempts {
            tokio::time::sleep(options.delay).await;
        }
    }

    Err(Error::WaitTimeout(format!(
        "bucket '{bucket}' was not {} after {} checks",
        state.describe(),
        options.max_attempts
    )))
}

/// Create a bucket and wait until the service reports it
pub async fn create_bucket(
    store: &dyn BucketStore,
    bucket: &str,
    options: WaitOptions,
    on_attempt: impl FnMut(u32),
) -> Result<()> {
    store.create_bucket(bucket).await?;
    wait_for_bucket(store, bucket, BucketState::Exists, options, on_attempt).await?;
    Ok(())
}

/// Delete a bucket and wait until the service no longer reports it
pub async fn delete_bucket(
    store: &dyn BucketStore,
    bucket: &str,
    options: WaitOptions,
    on_attempt: impl FnMut(u32),
) -> Result<()> {
    store.delete_bucket(bucket).await?;
    wait_for_bucket(store, bucket, BucketState::NotExists, options, on_attempt).await?;
    Ok(())
}

/// Validate a local policy file and upload it verbatim
///
/// Nothing is sent if the file is missing or is not a JSON object.
pub async fn put_policy_file(
    store: &dyn BucketStore,
    bucket: &str,
    policy_file: &Path,
) -> Result<PolicyDocument> {
    let policy = PolicyDocument::from_file(policy_file)?;
    store.put_bucket_policy(bucket, policy.as_str()).await?;
    Ok(policy)
}

/// Apply the fixed CORS rule to a bucket
pub async fn put_fixed_cors(store: &dyn BucketStore, bucket: &str) -> Result<CorsRule> {
    let rule = CorsRule::fixed();
    store
        .put_bucket_cors(bucket, std::slice::from_ref(&rule))
        .await?;
    Ok(rule)
}
