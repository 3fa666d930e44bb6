use thiserror::Error;

/// Viajero card error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("QR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("QR rendering failed: {0}")]
    QrRender(String),

    #[error("Referral artifact builder was torn down")]
    TornDown,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
