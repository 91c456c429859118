use super::ValuesOperations;
use crate::config::SheetsConfig;
use crate::error::{AppError, Result};
use crate::sheets::auth::{AuthType, build_authenticator};
use crate::sheets::values::{AppendParams, AppendRequest, BatchGetParams, BatchGetRequest};
use async_trait::async_trait;
use google_sheets4::api::{AppendValuesResponse, BatchGetValuesResponse, Sheets};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use std::fmt;
use tracing::{debug, instrument};

pub struct SheetsModel {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    auth: AuthType,
    scopes: Vec<String>,
    user_id: String,
}

// Manual impl: the hub and authenticator types don't implement Debug
impl fmt::Debug for SheetsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsModel")
            .field("scopes", &self.scopes)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl SheetsModel {
    /// Create a new SheetsModel from the given config.
    ///
    /// Validates the config, then wires up the authenticator and the Sheets
    /// hub. Nothing talks to Google here; tokens are requested per call.
    #[instrument(name = "Building Google Sheets client", skip_all)]
    pub async fn new(config: &SheetsConfig) -> Result<Self> {
        config.validate()?;

        let auth = build_authenticator(config).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);
        let hub = Sheets::new(client, auth.clone());

        Ok(Self {
            hub,
            auth,
            scopes: config.scopes.clone(),
            user_id: config.user_id.clone(),
        })
    }

    /// Request an access token for the configured scopes.
    ///
    /// May run the interactive flow or refresh an expired token, either of
    /// which can fail.
    pub async fn authorize(&self) -> Result<()> {
        self.auth
            .token(&self.scopes)
            .await
            .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;
        Ok(())
    }

    /// The user id this model was configured with.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[async_trait]
impl ValuesOperations for SheetsModel {
    #[instrument(
        name = "Appending values",
        skip_all,
        fields(spreadsheet_id = %params.id, range = %params.range)
    )]
    async fn append_value(&self, params: AppendParams) -> Result<AppendValuesResponse> {
        // Request an access token first
        self.authorize().await?;

        let AppendRequest {
            spreadsheet_id,
            range,
            value_range,
            value_input_option,
            include_values_in_response,
            fields,
        } = AppendRequest::from(params);

        let mut call = self
            .hub
            .spreadsheets()
            .values_append(value_range, &spreadsheet_id, &range)
            .value_input_option(value_input_option)
            .add_scopes(&self.scopes);

        if let Some(include) = include_values_in_response {
            call = call.include_values_in_response(include);
        }
        if let Some(fields) = &fields {
            call = call.param("fields", fields.as_str());
        }

        let (_, response) = call
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to append values: {}", e)))?;

        debug!(
            updated_range = ?response.updates.as_ref().and_then(|u| u.updated_range.as_deref()),
            "Values appended"
        );
        Ok(response)
    }

    #[instrument(
        name = "Fetching values",
        skip_all,
        fields(spreadsheet_id = %params.id)
    )]
    async fn batch_get_values(&self, params: BatchGetParams) -> Result<BatchGetValuesResponse> {
        self.authorize().await?;

        let BatchGetRequest {
            spreadsheet_id,
            major_dimension,
            ranges,
            fields,
        } = BatchGetRequest::from(params);

        let mut call = self
            .hub
            .spreadsheets()
            .values_batch_get(&spreadsheet_id)
            .add_scopes(&self.scopes);

        if let Some(dimension) = &major_dimension {
            call = call.major_dimension(dimension);
        }
        for range in &ranges {
            call = call.add_ranges(range);
        }
        if let Some(fields) = &fields {
            call = call.param("fields", fields.as_str());
        }

        let (_, response) = call
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to get values: {}", e)))?;

        debug!(
            value_ranges = response.value_ranges.as_ref().map_or(0, Vec::len),
            "Values fetched"
        );
        Ok(response)
    }
}
