use thiserror::Error;

use crate::client::error::ClientError;

#[derive(Error, Debug)]
pub enum OperationError {
    #[error("OperationError - Client: {0}")]
    Client(#[from] ClientError),
    #[error("OperationError - PageMeta: {0}")]
    PageMeta(#[from] paged::PageMetaError),
}
