//! Bucket CORS commands
//!
//! put-cors always applies the same rule: GET and HEAD from any origin,
//! Authorization header allowed, 3000 second max-age. There is no way to
//! supply a custom CORS document.

use s3policy_core::{operations, BucketStore, CorsRule, Result};
use serde::Serialize;

use super::{report_success, BucketArgs};
use crate::output::Formatter;

#[derive(Debug, Serialize)]
struct CorsOutput<'a> {
    bucket: &'a str,
    rules: &'a [CorsRule],
}

/// Execute the get-cors command
pub async fn get(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let rules = store.get_bucket_cors(&args.bucket).await?;

    if formatter.is_json() {
        formatter.json(&CorsOutput {
            bucket: &args.bucket,
            rules: &rules,
        });
    } else if rules.is_empty() {
        formatter.println("No CORS rules.");
    } else {
        formatter.println(&rules_table(formatter, &rules));
    }
    Ok(())
}

fn rules_table(formatter: &Formatter, rules: &[CorsRule]) -> String {
    let mut table = formatter.table([
        "ID",
        "Methods",
        "Origins",
        "Headers",
        "Expose headers",
        "Max age",
    ]);
    for rule in rules {
        table.add_row([
            rule.id.clone().unwrap_or_else(|| "-".into()),
            rule.allowed_methods.join(", "),
            rule.allowed_origins.join(", "),
            rule.allowed_headers.join(", "),
            rule.expose_headers.join(", "),
            rule.max_age_seconds
                .map(|s| format!("{s}s"))
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    table.to_string()
}

/// Execute the put-cors command
pub async fn put(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    let rule = operations::put_fixed_cors(store, &args.bucket).await?;
    tracing::debug!(bucket = %args.bucket, ?rule, "Applied CORS rule");

    report_success(
        formatter,
        "put-cors",
        &args.bucket,
        &format!("CORS set on bucket '{}'.", args.bucket),
    );
    Ok(())
}

/// Execute the del-cors command
pub async fn delete(args: BucketArgs, store: &dyn BucketStore, formatter: &Formatter) -> Result<()> {
    store.delete_bucket_cors(&args.bucket).await?;

    report_success(
        formatter,
        "del-cors",
        &args.bucket,
        &format!("CORS deleted from bucket '{}'.", args.bucket),
    );
    Ok(())
}
