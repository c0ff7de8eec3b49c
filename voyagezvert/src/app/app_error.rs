use thiserror::Error;
use voyagezvert_carbon::model::CarbonError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    CarbonError {
        #[from]
        source: CarbonError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure reading CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("no input found in {0}")]
    EmptyInput(String),
}
