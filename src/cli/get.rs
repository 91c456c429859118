use clap::Args;
use gsheets_model::{
    BatchGetParams, MajorDimension, Result, SheetsConfig, SheetsModel, ValuesOperations,
};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// ID of the spreadsheet to read from
    #[arg(long, short = 's')]
    spreadsheet_id: String,

    /// Range to return, in A1 notation (can be repeated)
    #[arg(long, action = clap::ArgAction::Append)]
    ranges: Vec<String>,

    /// How the returned values are laid out (ROWS or COLUMNS)
    #[arg(long)]
    major_dimension: Option<MajorDimension>,

    /// Response field paths to return, comma separated
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
}

impl GetArgs {
    pub async fn execute(&self) -> Result<()> {
        let config = SheetsConfig::load()?;
        let model = SheetsModel::new(&config).await?;

        let params = BatchGetParams {
            id: self.spreadsheet_id.clone(),
            major_dimension: self.major_dimension,
            ranges: self.ranges.clone(),
            ret_fields: self.fields.clone(),
        };

        let response = model.batch_get_values(params).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);

        Ok(())
    }
}
