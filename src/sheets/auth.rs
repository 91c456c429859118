use crate::config::SheetsConfig;
use crate::error::{AppError, Result};
use hyper_util::client::legacy::connect::HttpConnector;
use std::fs;
use tracing::debug;
use tracing::instrument;
use yup_oauth2::{
    InstalledFlowAuthenticator, InstalledFlowReturnMethod, authenticator::Authenticator,
    hyper_rustls::HttpsConnector,
};

pub(super) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Build the authenticator that every call obtains its access token from.
///
/// Reads the OAuth client secret from the configured file and persists the
/// token to the configured path. No token is requested here; the interactive
/// flow (or a refresh) runs on the first authorize.
pub(super) async fn build_authenticator(config: &SheetsConfig) -> Result<AuthType> {
    let secret = yup_oauth2::read_application_secret(&config.client_secret_file)
        .await
        .map_err(|e| {
            AppError::Auth(format!(
                "Failed to read client secret {}: {}",
                config.client_secret_file, e
            ))
        })?;

    let token_path = config.token_path();

    // Create the token directory if it doesn't exist
    if let Some(parent) = token_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Auth(format!("Failed to create token directory: {}", e)))?;
    }

    // Interactive mode: the user copy/pastes the authorization code from
    // the browser when no persisted token can be used
    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::Interactive)
        .persist_tokens_to_disk(token_path)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(auth)
}

/// Clear cached Google tokens by deleting the persisted token file
#[instrument(name = "Clearing Google auth tokens", skip_all)]
pub fn clear_tokens(config: &SheetsConfig) -> Result<()> {
    let token_path = config.token_path();

    if !token_path.exists() {
        debug!("No Google tokens to clear");
        return Ok(());
    }

    fs::remove_file(&token_path)
        .map_err(|e| AppError::Auth(format!("Failed to delete tokens file: {}", e)))?;
    debug!("Cleared cached Google tokens");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_helpers::mock_config;

    #[test]
    fn test_clear_tokens_removes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SheetsConfig {
            token_dir: dir.path().to_string_lossy().into_owned(),
            token_file: "token.json".to_string(),
            ..mock_config()
        };
        fs::write(config.token_path(), "{}").unwrap();

        clear_tokens(&config).unwrap();
        assert!(!config.token_path().exists());
    }

    #[test]
    fn test_clear_tokens_is_ok_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SheetsConfig {
            token_dir: dir.path().to_string_lossy().into_owned(),
            token_file: "token.json".to_string(),
            ..mock_config()
        };

        clear_tokens(&config).unwrap();
    }
}
