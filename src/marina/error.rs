use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Boat type not found: {0}")]
    BoatTypeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MarinaError>;
