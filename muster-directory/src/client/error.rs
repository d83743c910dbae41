use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("ClientError - NotFound: no {entity} with id '{id}'")]
    NotFound { entity: &'static str, id: String },
    #[error("ClientError - Remote: {0}")]
    Remote(String),
}

impl ClientError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
