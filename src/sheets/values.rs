use crate::error::AppError;
use google_sheets4::api::ValueRange;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// Submitted values are parsed as if the user had typed them into the UI:
// formulas evaluate, dates and numbers parse.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

/// Orientation of a 2-D block of cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorDimension {
    Rows,
    Columns,
}

impl MajorDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            MajorDimension::Rows => "ROWS",
            MajorDimension::Columns => "COLUMNS",
        }
    }
}

impl fmt::Display for MajorDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MajorDimension {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ROWS" => Ok(MajorDimension::Rows),
            // COLS is the spelling some older client docs used
            "COLUMNS" | "COLS" => Ok(MajorDimension::Columns),
            _ => Err(AppError::Config(format!(
                "invalid major dimension '{}', expected ROWS or COLUMNS",
                s
            ))),
        }
    }
}

/// Parameters for appending values to a spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct AppendParams {
    /// ID of the spreadsheet.
    pub id: String,
    /// Range searched for a table to append after, in A1 notation.
    pub range: String,
    /// The 2-D block of cell values to append.
    pub values: Vec<Vec<Value>>,
    /// Orientation of `values`.
    pub major_dimension: Option<MajorDimension>,
    /// Return the appended values in the response?
    pub include_values_in_response: Option<bool>,
    /// Field paths the response is restricted to.
    pub ret_fields: Vec<String>,
}

/// Parameters for reading values from a spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct BatchGetParams {
    /// ID of the spreadsheet.
    pub id: String,
    /// Orientation of the returned values.
    pub major_dimension: Option<MajorDimension>,
    /// Ranges to return, in A1 notation.
    pub ranges: Vec<String>,
    /// Field paths the response is restricted to.
    pub ret_fields: Vec<String>,
}

/// An append call in the shape the remote service expects.
#[derive(Debug, Clone)]
pub(super) struct AppendRequest {
    pub(super) spreadsheet_id: String,
    pub(super) range: String,
    pub(super) value_range: ValueRange,
    pub(super) value_input_option: &'static str,
    pub(super) include_values_in_response: Option<bool>,
    pub(super) fields: Option<String>,
}

impl From<AppendParams> for AppendRequest {
    fn from(params: AppendParams) -> Self {
        let AppendParams {
            id,
            range,
            values,
            major_dimension,
            include_values_in_response,
            ret_fields,
        } = params;

        AppendRequest {
            spreadsheet_id: id,
            range,
            value_range: ValueRange {
                major_dimension: major_dimension.map(|d| d.as_str().to_string()),
                range: None,
                values: Some(values),
            },
            value_input_option: VALUE_INPUT_OPTION,
            include_values_in_response,
            fields: join_fields(&ret_fields),
        }
    }
}

/// A batch-get call in the shape the remote service expects.
#[derive(Debug, Clone)]
pub(super) struct BatchGetRequest {
    pub(super) spreadsheet_id: String,
    pub(super) major_dimension: Option<String>,
    pub(super) ranges: Vec<String>,
    pub(super) fields: Option<String>,
}

impl From<BatchGetParams> for BatchGetRequest {
    fn from(params: BatchGetParams) -> Self {
        let BatchGetParams {
            id,
            major_dimension,
            ranges,
            ret_fields,
        } = params;

        BatchGetRequest {
            spreadsheet_id: id,
            major_dimension: major_dimension.map(|d| d.as_str().to_string()),
            ranges,
            fields: join_fields(&ret_fields),
        }
    }
}

/// Comma-join the field mask, treating an empty list as absent.
fn join_fields(ret_fields: &[String]) -> Option<String> {
    match ret_fields.is_empty() {
        true => None,
        false => Some(ret_fields.join(",")),
    }
}
