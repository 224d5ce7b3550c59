//! Bucket metadata returned by the storage service

use serde::{Deserialize, Serialize};

/// Fixed rule applied by `put-cors`
pub const DEFAULT_CORS_ALLOWED_HEADERS: &[&str] = &["Authorization"];
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &[&str] = &["*"];
pub const DEFAULT_CORS_ALLOWED_METHODS: &[&str] = &["GET", "HEAD"];
pub const DEFAULT_CORS_MAX_AGE_SECONDS: i32 = 3000;

/// A bucket as reported by list-buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Creation timestamp, when the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<jiff::Timestamp>,
}

impl BucketInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creation_date: None,
        }
    }
}

/// Bucket owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Entity a grant applies to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grantee {
    /// CanonicalUser, AmazonCustomerByEmail or Group
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Grantee {
    /// Best identifier available for display
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.id.as_deref())
            .or(self.email.as_deref())
            .or(self.uri.as_deref())
            .unwrap_or("-")
    }
}

/// A single ACL grant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub grantee: Grantee,

    /// FULL_CONTROL, READ, WRITE, READ_ACP or WRITE_ACP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

/// Access control list of a bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketAcl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    pub grants: Vec<Grant>,
}

/// A cross-origin resource sharing rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorsRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub allowed_headers: Vec<String>,

    pub allowed_methods: Vec<String>,

    pub allowed_origins: Vec<String>,

    #[serde(default)]
    pub expose_headers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i32>,
}

impl CorsRule {
    /// The only rule `put-cors` applies: GET/HEAD from any origin
    pub fn fixed() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            id: None,
            allowed_headers: owned(DEFAULT_CORS_ALLOWED_HEADERS),
            allowed_methods: owned(DEFAULT_CORS_ALLOWED_METHODS),
            allowed_origins: owned(DEFAULT_CORS_ALLOWED_ORIGINS),
            expose_headers: Vec::new(),
            max_age_seconds: Some(DEFAULT_CORS_MAX_AGE_SECONDS),
        }
    }
}
