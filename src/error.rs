use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row of a present source could not be read. The run aborts.
    #[error("{source_name} line {line}: bad `{field}`: {message}")]
    MalformedRow {
        source_name: String,
        line: u64,
        field: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;
