use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Unknown supplier address: {0}")]
    UnknownSupplier(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Event sink error: {0}")]
    SinkError(String),
}
