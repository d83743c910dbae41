use thiserror::Error;

use crate::client::error::ClientError;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("UserError - Client: {0}")]
    Client(#[from] ClientError),
    #[error("UserError - PageMeta: {0}")]
    PageMeta(#[from] paged::PageMetaError),
}
