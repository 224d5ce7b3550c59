//! Bucket policy commands
//!
//! put-policy uploads a local JSON document verbatim, get-policy prints the
//! stored document, del-policy removes it.

use std::path::PathBuf;

use clap::Args;
use s3policy_core::{operations, BucketStore, Result};
use serde::Serialize;

use super::{report_success, BucketArgs};
use crate::output::Formatter;

/// Put a policy
#[derive(Args, Debug)]
pub struct PutPolicyArgs {
    #[command(flatten)]
    pub target: BucketArgs,

    /// File with policy
    #[arg(short = 'f', long = "file")]
    pub policy_file: PathBuf,
}

#[derive(Debug, Serialize)]
struct PolicyOutput<'a> {
    bucket: &'a str,
    policy: &'a str,
}

/// Execute the put-policy command
pub async fn put(args: PutPolicyArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let bucket = &args.target.bucket;
    operations::put_policy_file(store, bucket, &args.policy_file).await?;

    report_success(
        formatter,
        "put-policy",
        bucket,
        &format!("Policy set on bucket '{bucket}'."),
    );
    Ok(())
}

/// Execute the get-policy command
pub async fn get(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let policy = store.get_bucket_policy(&args.bucket).await?;

    if formatter.is_json() {
        formatter.json(&PolicyOutput {
            bucket: &args.bucket,
            policy: &policy,
        });
    } else {
        formatter.println(&policy);
    }
    Ok(())
}

/// Execute the del-policy command
pub async fn delete(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    store.delete_bucket_policy(&args.bucket).await?;

    report_success(
        formatter,
        "del-policy",
        &args.bucket,
        &format!("Policy deleted from bucket '{}'.", args.bucket),
    );
    Ok(())
}
