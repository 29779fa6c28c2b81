use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlobalError {
    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlobalError>;
