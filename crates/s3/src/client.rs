//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the BucketStore trait from s3policy-core.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::types::{CorsConfiguration, CorsRule as SdkCorsRule};
use aws_smithy_types::DateTime;

use s3policy_core::{
    BucketAcl, BucketInfo, BucketStore, CorsRule, Error, Grant, Grantee, Owner, Profile, Result,
};

/// Service error codes that mean the bucket or sub-resource is absent
const NOT_FOUND_CODES: &[&str] = &[
    "NoSuchBucket",
    "NoSuchBucketPolicy",
    "NoSuchCORSConfiguration",
    "NotFound",
];

/// Service error codes for rejected credentials or permissions
const AUTH_CODES: &[&str] = &[
    "AccessDenied",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
];

/// Service error codes for bucket state conflicts
const CONFLICT_CODES: &[&str] = &[
    "BucketAlreadyExists",
    "BucketAlreadyOwnedByYou",
    "BucketNotEmpty",
];

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from a profile
    ///
    /// Credentials, region and endpoint all come from the profile; nothing is
    /// discovered from the environment.
    pub async fn new(profile: &Profile) -> Result<Self> {
        let credentials = aws_credential_types::Credentials::new(
            profile.id.clone(),
            profile.key.clone(),
            None, // session token
            None, // expiry
            "s3policy-profile",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(profile.region.clone()))
            .endpoint_url(&profile.endpoint)
            .load()
            .await;

        // Path-style addressing for S3-compatible endpoints
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        tracing::debug!(
            profile = %profile.name,
            endpoint = %profile.endpoint,
            region = %profile.region,
            "Created S3 client"
        );

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

}

/// Map an SDK failure onto the core error type
fn map_sdk_error<E, R>(err: SdkError<E, R>, context: &str) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = format!("{context}: {}", DisplayErrorContext(&err));
    classify(err.code(), message)
}

fn classify(code: Option<&str>, message: String) -> Error {
    match code {
        Some(code) if NOT_FOUND_CODES.contains(&code) => Error::NotFound(message),
        Some(code) if AUTH_CODES.contains(&code) => Error::Auth(message),
        Some(code) if CONFLICT_CODES.contains(&code) => Error::Conflict(message),
        _ => Error::Network(message),
    }
}

/// Existence implied by a failed HeadBucket
///
/// 404 means absent. 301 (wrong region) and 403 (owned by someone else, or no
/// permission to read it) still mean the bucket exists. Anything else is an
/// error.
fn head_bucket_existence(not_found: bool, status: Option<u16>) -> Option<bool> {
    if not_found {
        return Some(false);
    }
    match status {
        Some(404) => Some(false),
        Some(301 | 403) => Some(true),
        _ => None,
    }
}

fn to_timestamp(date: &DateTime) -> Option<jiff::Timestamp> {
    jiff::Timestamp::new(date.secs(), date.subsec_nanos() as i32).ok()
}

fn to_sdk_cors_rule(rule: &CorsRule) -> Result<SdkCorsRule> {
    SdkCorsRule::builder()
        .set_id(rule.id.clone())
        .set_allowed_headers(Some(rule.allowed_headers.clone()))
        .set_allowed_methods(Some(rule.allowed_methods.clone()))
        .set_allowed_origins(Some(rule.allowed_origins.clone()))
        .set_expose_headers(Some(rule.expose_headers.clone()))
        .set_max_age_seconds(rule.max_age_seconds)
        .build()
        .map_err(|e| Error::General(format!("Invalid CORS rule: {e}")))
}

fn from_sdk_cors_rule(rule: &SdkCorsRule) -> CorsRule {
    CorsRule {
        id: rule.id().map(str::to_string),
        allowed_headers: rule.allowed_headers().to_vec(),
        allowed_methods: rule.allowed_methods().to_vec(),
        allowed_origins: rule.allowed_origins().to_vec(),
        expose_headers: rule.expose_headers().to_vec(),
        max_age_seconds: rule.max_age_seconds(),
    }
}

#[async_trait]
impl BucketStore for S3Client {
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        tracing::debug!("ListBuckets");
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "ListBuckets failed"))?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| BucketInfo {
                name: b.name().unwrap_or_default().to_string(),
                creation_date: b.creation_date().and_then(to_timestamp),
            })
            .collect();

        Ok(buckets)
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.inner.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                let not_found = e
                    .as_service_error()
                    .map(|se| se.is_not_found())
                    .unwrap_or(false);
                let status = e.raw_response().map(|r| r.status().as_u16());
                match head_bucket_existence(not_found, status) {
                    Some(exists) => Ok(exists),
                    None => Err(map_sdk_error(e, &format!("HeadBucket {bucket} failed"))),
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        tracing::debug!(bucket, "CreateBucket");
        self.inner
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Unable to create bucket '{bucket}'")))?;

        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        tracing::debug!(bucket, "DeleteBucket");
        self.inner
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Unable to delete bucket '{bucket}'")))?;

        Ok(())
    }

    async fn get_bucket_policy(&self, bucket: &str) -> Result<String> {
        tracing::debug!(bucket, "GetBucketPolicy");
        let response = self
            .inner
            .get_bucket_policy()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("GetBucketPolicy '{bucket}' failed")))?;

        Ok(response.policy().unwrap_or_default().to_string())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()> {
        tracing::debug!(bucket, bytes = policy.len(), "PutBucketPolicy");
        self.inner
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(e, &format!("Unable to set policy on bucket '{bucket}'"))
            })?;

        Ok(())
    }

    async fn delete_bucket_policy(&self, bucket: &str) -> Result<()> {
        tracing::debug!(bucket, "DeleteBucketPolicy");
        self.inner
            .delete_bucket_policy()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(e, &format!("Unable to delete policy on bucket '{bucket}'"))
            })?;

        Ok(())
    }

    async fn get_bucket_acl(&self, bucket: &str) -> Result<BucketAcl> {
        tracing::debug!(bucket, "GetBucketAcl");
        let response = self
            .inner
            .get_bucket_acl()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("GetBucketAcl '{bucket}' failed")))?;

        let owner = response.owner().map(|o| Owner {
            id: o.id().map(str::to_string),
            display_name: o.display_name().map(str::to_string),
        });

        let grants = response
            .grants()
            .iter()
            .map(|g| Grant {
                grantee: g
                    .grantee()
                    .map(|grantee| Grantee {
                        kind: grantee.r#type().as_str().to_string(),
                        id: grantee.id().map(str::to_string),
                        display_name: grantee.display_name().map(str::to_string),
                        email: grantee.email_address().map(str::to_string),
                        uri: grantee.uri().map(str::to_string),
                    })
                    .unwrap_or_default(),
                permission: g.permission().map(|p| p.as_str().to_string()),
            })
            .collect();

        Ok(BucketAcl { owner, grants })
    }

    async fn get_bucket_cors(&self, bucket: &str) -> Result<Vec<CorsRule>> {
        tracing::debug!(bucket, "GetBucketCors");
        let response = self
            .inner
            .get_bucket_cors()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("GetBucketCors '{bucket}' failed")))?;

        Ok(response.cors_rules().iter().map(from_sdk_cors_rule).collect())
    }

    async fn put_bucket_cors(&self, bucket: &str, rules: &[CorsRule]) -> Result<()> {
        tracing::debug!(bucket, rules = rules.len(), "PutBucketCors");
        let rules = rules
            .iter()
            .map(to_sdk_cors_rule)
            .collect::<Result<Vec<_>>>()?;

        let configuration = CorsConfiguration::builder()
            .set_cors_rules(Some(rules))
            .build()
            .map_err(|e| Error::General(format!("Invalid CORS configuration: {e}")))?;

        self.inner
            .put_bucket_cors()
            .bucket(bucket)
            .cors_configuration(configuration)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("Unable to set CORS on bucket '{bucket}'")))?;

        Ok(())
    }

    async fn delete_bucket_cors(&self, bucket: &str) -> Result<()> {
        tracing::debug!(bucket, "DeleteBucketCors");
        self.inner
            .delete_bucket_cors()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                map_sdk_error(e, &format!("Unable to delete CORS on bucket '{bucket}'"))
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_codes() {
        assert!(matches!(
            classify(Some("NoSuchBucketPolicy"), "x".into()),
            Error::NotFound(_)
        ));
        assert!(matches!(
            classify(Some("NoSuchCORSConfiguration"), "x".into()),
            Error::NotFound(_)
        ));
        assert!(matches!(
            classify(Some("AccessDenied"), "x".into()),
            Error::Auth(_)
        ));
        assert!(matches!(
            classify(Some("BucketAlreadyOwnedByYou"), "x".into()),
            Error::Conflict(_)
        ));
        assert!(matches!(
            classify(Some("InternalError"), "x".into()),
            Error::Network(_)
        ));
        assert!(matches!(classify(None, "x".into()), Error::Network(_)));
    }

    #[test]
    fn test_head_bucket_existence() {
        assert_eq!(head_bucket_existence(true, None), Some(false));
        assert_eq!(head_bucket_existence(false, Some(404)), Some(false));
        assert_eq!(head_bucket_existence(false, Some(403)), Some(true));
        assert_eq!(head_bucket_existence(false, Some(301)), Some(true));
        assert_eq!(head_bucket_existence(false, Some(500)), None);
        assert_eq!(head_bucket_existence(false, None), None);
    }

    #[test]
    fn test_cors_rule_conversion_preserves_fields() {
        let rule = CorsRule::fixed();
        let sdk_rule = to_sdk_cors_rule(&rule).unwrap();

        assert_eq!(sdk_rule.allowed_methods(), ["GET", "HEAD"]);
        assert_eq!(sdk_rule.allowed_origins(), ["*"]);
        assert_eq!(sdk_rule.allowed_headers(), ["Authorization"]);
        assert_eq!(sdk_rule.max_age_seconds(), Some(3000));
        assert_eq!(from_sdk_cors_rule(&sdk_rule), rule);
    }

    #[test]
    fn test_to_timestamp() {
        let date = DateTime::from_secs(1_700_000_000);
        let ts = to_timestamp(&date).unwrap();
        assert_eq!(ts.as_second(), 1_700_000_000);
    }

    #[tokio::test]
    async fn test_client_from_profile() {
        let profile = Profile::new(
            "local",
            "AKIDEXAMPLE",
            "secret",
            "us-east-1",
            "http://localhost:9000",
        );
        let client = S3Client::new(&profile).await.unwrap();
        let config = client.inner.config();

        assert_eq!(config.region().map(|r| r.as_ref()), Some("us-east-1"));
    }
}
