use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse introspection response: {0}")]
    ParseSchema(#[source] serde_json::Error),

    #[error("Failed to parse ordering document: {0}")]
    ParseOrdering(#[source] serde_json::Error),

    #[error("Failed to serialize type list: {0}")]
    SerializeTypeList(#[source] serde_json::Error),
}
