//! Connection profiles
//!
//! A profile is a named set of credentials and connection parameters for one
//! storage account, read from one section of the configuration file.

use std::fmt;

/// Keys every profile section must define, in the order they are checked
pub const REQUIRED_KEYS: [&str; 4] = ["id", "key", "region", "endpoint"];

/// Credentials and endpoint for one storage account
#[derive(Clone, PartialEq, Eq)]
pub struct Profile {
    /// Section name in the configuration file
    pub name: String,

    /// Access key ID
    pub id: String,

    /// Secret access key
    pub key: String,

    /// Region sent with every signed request
    pub region: String,

    /// S3 endpoint URL
    pub endpoint: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        key: impl Into<String>,
        region: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            key: key.into(),
            region: region.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("key", &"********")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
