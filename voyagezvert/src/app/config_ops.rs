use super::AppError;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader};

/// reads a TOML or JSON file into `T`, chosen by file extension.
pub fn read_config_file<T: DeserializeOwned>(f: &String) -> Result<T, AppError> {
    if f.ends_with(".toml") {
        let s = std::fs::read_to_string(f)
            .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        toml::from_str(&s)
            .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
    } else if f.ends_with(".json") {
        read_json_file(f)
    } else {
        Err(AppError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}

pub fn read_json_file<T: DeserializeOwned>(f: &String) -> Result<T, AppError> {
    let file = File::open(f)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// reads all rows of a CSV file with headers, trimming whitespace around fields.
pub fn read_csv_file<T: DeserializeOwned>(f: &String) -> Result<Vec<T>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(f)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}
