mod auth;
mod client;
mod values;

pub use client::SheetsModel;
pub use values::{AppendParams, BatchGetParams, MajorDimension};

// Re-export clear_tokens for CLI usage
pub use auth::clear_tokens;

use crate::error::Result;
use async_trait::async_trait;
use google_sheets4::api::{AppendValuesResponse, BatchGetValuesResponse};

#[async_trait]
pub trait ValuesOperations {
    /// Append a block of values after the table found in the given range.
    async fn append_value(&self, params: AppendParams) -> Result<AppendValuesResponse>;

    /// Read values from the given ranges of a spreadsheet.
    async fn batch_get_values(&self, params: BatchGetParams) -> Result<BatchGetValuesResponse>;
}
