//! Thin adapter over the Google Sheets v4 API: config-driven OAuth via an
//! installed-flow authenticator, plus append and batch-get value calls that
//! relay the raw API responses unchanged.

pub mod config;
pub mod error;
pub mod sheets;

pub use config::SheetsConfig;
pub use error::{AppError, Result};
pub use sheets::{
    AppendParams, BatchGetParams, MajorDimension, SheetsModel, ValuesOperations, clear_tokens,
};

// The raw response types the two calls relay unchanged
pub use google_sheets4::api::{AppendValuesResponse, BatchGetValuesResponse};
