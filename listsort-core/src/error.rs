use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table}: missing column `{column}`")]
    MissingColumn { table: String, column: String },

    #[error("{table} line {line}: listing id `{value}` is not an integer")]
    InvalidListingId {
        table: String,
        line: u64,
        value: String,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for SortError {
    fn from(e: toml::de::Error) -> Self {
        SortError::Config(e.to_string())
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SortError>;
