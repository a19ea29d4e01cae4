use thiserror::Error;

#[derive(Error, Debug)]
pub enum FissionError {
    #[error("Unknown tile name: {0:?}")]
    UnknownTileName(String),

    #[error("Unknown tile code: {0}")]
    UnknownTileCode(u8),

    #[error("Malformed layout: {0}")]
    MalformedLayout(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FissionError>;
