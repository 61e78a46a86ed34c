use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot decode '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("garden bed name must not be empty")]
    EmptyName,
    #[error("'{0}' is not a hardiness zone (expected 1-13)")]
    InvalidZone(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
