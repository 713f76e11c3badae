use super::Result;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Connection parameters for one database target.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub rebuild_script: Option<PathBuf>,
}

fn default_port() -> u16 {
    5432
}

impl Profile {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, value) in [
            ("host", &self.host),
            ("database", &self.database),
            ("user", &self.user),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: "0".to_string(),
                reason: "port must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| StorageError::ConfigParse {
            message: e.to_string(),
        })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParse {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigParse {
            message: "platform configuration directory not found".to_string(),
        })?;

        Ok(config_dir.join("avstat-cli").join("config.toml"))
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_profile() -> Profile {
        Profile {
            host: "db.example.test".to_string(),
            port: 5432,
            database: "aviation".to_string(),
            user: "reporter".to_string(),
            password: None,
            rebuild_script: None,
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_profile, None);
        assert_eq!(config.profiles.len(), 0);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();
        config.set_profile("test".to_string(), sample_profile());

        let retrieved = config.get_profile("test").expect("profile should exist");
        assert_eq!(retrieved.host, "db.example.test");
        assert_eq!(retrieved.port, 5432);
        assert!(config.get_profile("nonexistent").is_none());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.default_profile = Some("test".to_string());
        config.set_profile("test".to_string(), sample_profile());

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded.default_profile, Some("test".to_string()));
        assert_eq!(loaded.profiles.len(), 1);
        assert_eq!(loaded.get_profile("test").unwrap().database, "aviation");
    }

    #[test]
    fn test_load_nonexistent_file_yields_default() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("missing file should load as default");
        assert_eq!(config.profiles.len(), 0);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "profiles = 3").expect("write");

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(matches!(err, StorageError::ConfigParse { .. }));
    }

    #[test]
    fn test_profile_port_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [profiles.default]
            host = "localhost"
            database = "aviation"
            user = "reporter"
            "#,
        )
        .expect("parse");
        assert_eq!(parsed.get_profile("default").unwrap().port, 5432);
    }

    #[test]
    fn test_profile_validation() {
        assert!(sample_profile().validate().is_ok());

        let mut empty_host = sample_profile();
        empty_host.host = "  ".to_string();
        assert!(matches!(
            empty_host.validate().unwrap_err(),
            ConfigError::MissingField { .. }
        ));

        let mut bad_port = sample_profile();
        bad_port.port = 0;
        assert!(matches!(
            bad_port.validate().unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }
}
