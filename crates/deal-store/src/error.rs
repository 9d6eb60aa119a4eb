use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to reach the record store: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The record store returned an error: {0}")]
    Store(String),

    #[error("Failed to deserialize store rows: {0}")]
    Deserialization(String),
}
