use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "gsheets-model";

/// User id assumed when the config doesn't name one.
pub const DEFAULT_USER_ID: &str = "me";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SheetsConfig {
    /// OAuth scopes requested for every call made through the adapter.
    pub scopes: Vec<String>,
    /// Name of the file the Google access token is persisted to.
    pub token_file: String,
    /// Directory the token file lives in. Created on demand.
    pub token_dir: String,
    /// Full path to the OAuth client secret downloaded from the Google
    /// Cloud Console.
    pub client_secret_file: String,
    pub user_id: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            scopes: Vec::new(),
            token_file: String::new(),
            token_dir: String::new(),
            client_secret_file: String::new(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl SheetsConfig {
    /// Check that all required fields are set, naming the first missing one.
    pub fn validate(&self) -> Result<()> {
        if self.scopes.is_empty() {
            return Err(Self::missing("scopes"));
        }
        if self.token_file.is_empty() {
            return Err(Self::missing("token_file"));
        }
        if self.token_dir.is_empty() {
            return Err(Self::missing("token_dir"));
        }
        if self.client_secret_file.is_empty() {
            return Err(Self::missing("client_secret_file"));
        }
        Ok(())
    }

    fn missing(field: &str) -> AppError {
        AppError::Config(format!("required field not set: {}", field))
    }

    /// Full path the Google access token is persisted to.
    pub fn token_path(&self) -> PathBuf {
        PathBuf::from(&self.token_dir).join(&self.token_file)
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            )));
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: SheetsConfig = toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        Ok(config)
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;

    pub(crate) fn mock_config() -> SheetsConfig {
        SheetsConfig {
            scopes: vec!["https://www.googleapis.com/auth/spreadsheets".to_string()],
            token_file: "token.json".to_string(),
            token_dir: "/tmp/gsheets-model-tokens".to_string(),
            client_secret_file: "/tmp/client_secret.json".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::mock_config;
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = mock_config();

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: SheetsConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.scopes, deserialized.scopes);
        assert_eq!(config.token_file, deserialized.token_file);
        assert_eq!(config.token_dir, deserialized.token_dir);
        assert_eq!(config.client_secret_file, deserialized.client_secret_file);
        assert_eq!(config.user_id, deserialized.user_id);
    }

    #[test]
    fn test_validate_ok() {
        mock_config().validate().unwrap();
    }

    #[test]
    fn test_validate_missing_scopes() {
        let config = SheetsConfig {
            scopes: Vec::new(),
            ..mock_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: required field not set: scopes"
        );
    }

    #[test]
    fn test_validate_missing_token_file() {
        let config = SheetsConfig {
            token_file: String::new(),
            ..mock_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: required field not set: token_file"
        );
    }

    #[test]
    fn test_validate_missing_token_dir() {
        let config = SheetsConfig {
            token_dir: String::new(),
            ..mock_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: required field not set: token_dir"
        );
    }

    #[test]
    fn test_validate_missing_client_secret_file() {
        let config = SheetsConfig {
            client_secret_file: String::new(),
            ..mock_config()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: required field not set: client_secret_file"
        );
    }

    #[test]
    fn test_user_id_defaults_to_me() {
        let config: SheetsConfig = toml::from_str(
            r#"
            scopes = ["scope1"]
            token_file = "tok"
            token_dir = "/d"
            client_secret_file = "/s/secret.json"
            "#,
        )
        .unwrap();

        config.validate().unwrap();
        assert_eq!(config.user_id, "me");
    }

    #[test]
    fn test_user_id_from_config_wins() {
        let config: SheetsConfig = toml::from_str(
            r#"
            scopes = ["scope1"]
            token_file = "tok"
            token_dir = "/d"
            client_secret_file = "/s/secret.json"
            user_id = "someone@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.user_id, "someone@example.com");
    }

    #[test]
    fn test_missing_toml_field_is_named() {
        let config: SheetsConfig = toml::from_str(r#"scopes = ["scope1"]"#).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: required field not set: token_file"
        );
    }

    #[test]
    fn test_token_path_joins_dir_and_file() {
        let config = SheetsConfig {
            token_dir: "/var/cache/gsheets".to_string(),
            token_file: "token.json".to_string(),
            ..mock_config()
        };
        assert_eq!(
            config.token_path(),
            PathBuf::from("/var/cache/gsheets/token.json")
        );
    }
}
