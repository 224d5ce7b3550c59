//! Bucket commands: list-buckets, create-bucket, del-bucket
//!
//! create-bucket and del-bucket only report success once the service
//! confirms the bucket exists (or is gone).

use s3policy_core::{operations, BucketInfo, BucketStore, Result, WaitOptions};
use serde::Serialize;

use super::{report_success, BucketArgs};
use crate::output::{Formatter, Spinner};

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    buckets: &'a [BucketInfo],
}

/// Execute the list-buckets command
pub async fn list(store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let buckets = store.list_buckets().await?;

    if formatter.is_json() {
        formatter.json(&ListOutput { buckets: &buckets });
    } else if buckets.is_empty() {
        formatter.println("No buckets found.");
    } else {
        formatter.println(&buckets_table(formatter, &buckets));
    }
    Ok(())
}

fn buckets_table(formatter: &Formatter, buckets: &[BucketInfo]) -> String {
    let mut table = formatter.table(["Name", "Created"]);
    for bucket in buckets {
        let created = bucket
            .creation_date
            .map(|d| d.strftime("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        table.add_row([bucket.name.clone(), created]);
    }
    table.to_string()
}

/// Execute the create-bucket command
pub async fn create(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let bucket = &args.bucket;
    let options = WaitOptions::default();
    let spinner = Spinner::new(formatter.config(), &format!("Creating bucket '{bucket}'..."));

    operations::create_bucket(store, bucket, options, |attempt| {
        spinner.set_message(&format!(
            "Waiting for bucket '{bucket}' to be created ({attempt}/{})",
            options.max_attempts
        ));
    })
    .await?;
    spinner.finish_and_clear();

    report_success(
        formatter,
        "create-bucket",
        bucket,
        &format!("Bucket '{bucket}' created successfully."),
    );
    Ok(())
}

/// Execute the del-bucket command
pub async fn delete(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let bucket = &args.bucket;
    let options = WaitOptions::default();
    let spinner = Spinner::new(formatter.config(), &format!("Deleting bucket '{bucket}'..."));

    operations::delete_bucket(store, bucket, options, |attempt| {
        spinner.set_message(&format!(
            "Waiting for bucket '{bucket}' to be deleted ({attempt}/{})",
            options.max_attempts
        ));
    })
    .await?;
    spinner.finish_and_clear();

    report_success(
        formatter,
        "del-bucket",
        bucket,
        &format!("Bucket '{bucket}' deleted successfully."),
    );
    Ok(())
}
