use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open extract {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV extract {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Extract {path:?} is missing expected column {column}")]
    MissingColumn { path: PathBuf, column: String },
    #[error("Extract {path:?} row {row}: invalid {column} value {value:?}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
}
