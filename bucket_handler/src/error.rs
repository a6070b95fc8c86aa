use shared::error::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum HandlerError {
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown function name: {0}")]
    UnknownOperation(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
