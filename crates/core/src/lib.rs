//! s3policy-core: Core library for the s3policy CLI
//!
//! This crate provides:
//! - Profile loading from the INI configuration file
//! - Domain types for buckets, ACLs, CORS rules and policy documents
//! - The BucketStore trait for bucket-level S3 calls
//! - Operations layered on top of the trait (policy upload, bucket waits)
//!
//! This crate is independent of any specific S3 SDK.

pub mod config;
pub mod error;
pub mod operations;
pub mod policy;
pub mod profile;
pub mod traits;
pub mod types;

pub use config::{ProfileLoader, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use operations::{BucketState, WaitOptions};
pub use policy::PolicyDocument;
pub use profile::Profile;
pub use traits::BucketStore;
pub use types::{BucketAcl, BucketInfo, CorsRule, Grant, Grantee, Owner};
