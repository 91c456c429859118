use clap::Args;
use gsheets_model::{
    AppendParams, MajorDimension, Result, SheetsConfig, SheetsModel, ValuesOperations,
};
use serde_json::Value;

#[derive(Args, Debug)]
pub struct AppendArgs {
    /// ID of the spreadsheet to append to
    #[arg(long, short = 's')]
    spreadsheet_id: String,

    /// Table range to append after, in A1 notation
    #[arg(long, short = 'r')]
    range: String,

    /// How the submitted values are laid out (ROWS or COLUMNS)
    #[arg(long)]
    major_dimension: Option<MajorDimension>,

    /// Ask the service to echo the appended values back
    #[arg(long)]
    include_values_in_response: bool,

    /// Response field paths to return, comma separated
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Cell values making up the appended row
    #[arg(required = true)]
    values: Vec<String>,
}

impl AppendArgs {
    pub async fn execute(&self) -> Result<()> {
        let config = SheetsConfig::load()?;
        let model = SheetsModel::new(&config).await?;

        let row = self.values.iter().cloned().map(Value::String).collect();
        let params = AppendParams {
            id: self.spreadsheet_id.clone(),
            range: self.range.clone(),
            values: vec![row],
            major_dimension: self.major_dimension,
            include_values_in_response: self.include_values_in_response.then_some(true),
            ret_fields: self.fields.clone(),
        };

        let response = model.append_value(params).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);

        Ok(())
    }
}
