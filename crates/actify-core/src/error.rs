use thiserror::Error;

use actify_ingest::IngestError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
