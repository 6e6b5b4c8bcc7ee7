use thiserror::Error;

/// Failures of the persistent key-value layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not find home directory")]
    NoHomeDirectory,
    #[error("username must not be empty")]
    InvalidUsername,
}

/// Errors surfaced to the user by profile, gallery, portfolio and AR operations.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("No artist logged in!")]
    NoArtist,
    #[error("Select an artwork first!")]
    MissingFile,
    #[error("Enter artwork title!")]
    MissingTitle,
    #[error("Enter model name!")]
    MissingModelName,
    #[error("could not read {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}
