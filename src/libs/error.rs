use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The result set does not follow the `{type, fields, result}` contract
    #[error("invalid result set: {0}")]
    InvalidResult(#[from] serde_json::Error),

    /// A column key matches neither a field name nor an index
    #[error("no column named {0}")]
    UnknownColumn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No description is known for a topology class
    #[error("no class information for {topology}:{name}")]
    ClassNotFound { topology: String, name: String },

    /// A class description exists but is unusable
    #[error("malformed class description for {name}: {message}")]
    Decode { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
