use thiserror::Error;

use crate::client::error::ClientError;
use crate::operation::error::OperationError;
use crate::user::error::UserError;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("GroupError - Client: {0}")]
    Client(#[from] ClientError),
    #[error("GroupError - PageMeta: {0}")]
    PageMeta(#[from] paged::PageMetaError),
    #[error("GroupError - Operation: {0}")]
    Operation(#[from] OperationError),
    #[error("GroupError - User: {0}")]
    User(#[from] UserError),
    #[error("GroupError - UnknownOrderBy: {0}")]
    UnknownOrderBy(#[from] paged::UnknownOrderBy),
    #[error("GroupError - MissingField: {0} is not set")]
    MissingField(&'static str),
    #[error("GroupError - Validation: {0}")]
    Validation(String),
}

impl From<derive_builder::UninitializedFieldError> for GroupError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        GroupError::MissingField(err.field_name())
    }
}

impl From<String> for GroupError {
    fn from(err: String) -> Self {
        GroupError::Validation(err)
    }
}
