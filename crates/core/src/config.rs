//! Configuration file loading
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [prod]
//! id = AKIDEXAMPLE
//! key = wJalrXUtnFEMI
//! region = us-east-1
//! endpoint = https://s3.example.com
//! ```
//!
//! Every key in [`REQUIRED_KEYS`](crate::profile::REQUIRED_KEYS) must be present. There are no defaults,
//! no section merging and no environment overrides.

use std::path::PathBuf;

use ini::Ini;

use crate::error::{Error, Result};
use crate::profile::Profile;

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Loads profiles from an INI configuration file
#[derive(Debug)]
pub struct ProfileLoader {
    config_path: PathBuf,
}

impl ProfileLoader {
    /// Create a loader for the given configuration file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Load and validate the named profile
    pub fn load(&self, name: &str) -> Result<Profile> {
        let ini = Ini::load_from_file(&self.config_path).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {e}",
                self.config_path.display()
            ))
        })?;

        tracing::debug!(path = %self.config_path.display(), profile = name, "Loaded config file");
        profile_from_ini(&ini, name)
    }
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }
}

fn profile_from_ini(ini: &Ini, name: &str) -> Result<Profile> {
    let section = ini
        .section(Some(name))
        .ok_or_else(|| Error::ProfileNotFound(name.to_string()))?;

    let required = |key: &'static str| {
        section
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| Error::MissingKey {
                profile: name.to_string(),
                key,
            })
    };

    let id = required("id")?;
    let key = required("key")?;
    let region = required("region")?;
    let endpoint = required("endpoint")?;

    url::Url::parse(&endpoint).map_err(|e| {
        Error::Config(format!(
            "Invalid endpoint '{endpoint}' in profile '{name}': {e}"
        ))
    })?;

    Ok(Profile {
        name: name.to_string(),
        id,
        key,
        region,
        endpoint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::REQUIRED_KEYS;
    use std::path::Path;
    use tempfile::TempDir;

    fn parse_profile(content: &str, name: &str) -> Result<Profile> {
        let ini = Ini::load_from_str(content).unwrap();
        profile_from_ini(&ini, name)
    }

    const FULL_CONFIG: &str = r#"
[prod]
id = AKIDEXAMPLE
key = wJalrXUtnFEMI
region = eu-central-1
endpoint = https://s3.example.com

[staging]
id = AKIDSTAGING
key = stagingsecret
region = us-east-1
endpoint = http://localhost:9000
extra = ignored
"#;

    fn temp_loader(content: &str) -> (ProfileLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        (ProfileLoader::with_path(config_path), temp_dir)
    }

    #[test]
    fn test_load_profile() {
        let (loader, _temp_dir) = temp_loader(FULL_CONFIG);

        let profile = loader.load("prod").unwrap();
        assert_eq!(profile.name, "prod");
        assert_eq!(profile.id, "AKIDEXAMPLE");
        assert_eq!(profile.key, "wJalrXUtnFEMI");
        assert_eq!(profile.region, "eu-central-1");
        assert_eq!(profile.endpoint, "https://s3.example.com");
    }

    #[test]
    fn test_sections_are_independent() {
        let (loader, _temp_dir) = temp_loader(FULL_CONFIG);

        let profile = loader.load("staging").unwrap();
        assert_eq!(profile.id, "AKIDSTAGING");
        assert_eq!(profile.endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ProfileLoader::with_path(temp_dir.path().join("absent.ini"));

        let err = loader.load("prod").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_section() {
        let (loader, _temp_dir) = temp_loader(FULL_CONFIG);

        let err = loader.load("dev").unwrap_err();
        assert!(matches!(err, Error::ProfileNotFound(ref name) if name == "dev"));
    }

    #[test]
    fn test_each_required_key_is_enforced() {
        for missing in REQUIRED_KEYS {
            let mut content = String::from("[prod]\n");
            for (key, value) in [
                ("id", "AKIDEXAMPLE"),
                ("key", "secret"),
                ("region", "us-east-1"),
                ("endpoint", "http://localhost:9000"),
            ] {
                if key != missing {
                    content.push_str(&format!("{key} = {value}\n"));
                }
            }

            let err = parse_profile(&content, "prod").unwrap_err();
            assert!(err.is_config(), "missing {missing} should be a config error");
            match err {
                Error::MissingKey { profile, key } => {
                    assert_eq!(profile, "prod");
                    assert_eq!(key, missing);
                }
                other => panic!("unexpected error for missing {missing}: {other}"),
            }
        }
    }

    #[test]
    fn test_keys_are_not_inherited_from_other_sections() {
        let content = r#"
[base]
id = AKIDEXAMPLE
key = secret
region = us-east-1
endpoint = http://localhost:9000

[partial]
id = AKIDPARTIAL
"#;
        let err = parse_profile(content, "partial").unwrap_err();
        assert!(matches!(err, Error::MissingKey { key: "key", .. }));
    }

    #[test]
    fn test_invalid_endpoint() {
        let content = "[prod]\nid = a\nkey = b\nregion = us-east-1\nendpoint = not a url\n";
        let err = parse_profile(content, "prod").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("Invalid endpoint")));
    }

    #[test]
    fn test_default_path() {
        let loader = ProfileLoader::default();
        assert_eq!(loader.config_path, Path::new("./config.ini"));
    }
}
