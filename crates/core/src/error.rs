use abmaker_api::{ApiError, BoxError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error in {file}: {source}")]
    Config {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Malformed manifest {file}: {source}")]
    Manifest {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

impl From<BoxError> for AbError {
    fn from(err: BoxError) -> Self {
        AbError::Collaborator(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AbError>;
