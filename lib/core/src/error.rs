use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Element without {field} is not searchable (candidate #{index})")]
    UnsearchableCandidate { index: usize, field: String },

    #[error("No search methods specified.")]
    NoMethods,

    #[error("Invalid method definition: {0}")]
    InvalidMethodDefinition(String),

    #[error("Unknown search method: {0}")]
    UnknownMethod(String),

    #[error("Invalid weight for method '{method}': {weight}")]
    InvalidWeight { method: String, weight: f64 },

    #[error("Total method weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Invalid minimum score: {0}")]
    InvalidMinScore(f64),

    #[error("Invalid parameter '{name}' for method '{method}': {reason}")]
    InvalidParameter {
        method: String,
        name: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
