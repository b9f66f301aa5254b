/// Error type returned by collaborator implementations (scene sources, taggers, pipelines)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
