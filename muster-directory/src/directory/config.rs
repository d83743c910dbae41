use derive_builder::Builder;

use std::sync::Arc;

use crate::client::DirectoryClient;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct DirectoryConfig {
    pub(super) client: Arc<dyn DirectoryClient>,
    /// Window size for incremental search requests.
    #[builder(default = "DEFAULT_SEARCH_LIMIT")]
    pub(super) search_limit: usize,
}

impl DirectoryConfig {
    pub fn builder() -> DirectoryConfigBuilder {
        DirectoryConfigBuilder::default()
    }
}

impl DirectoryConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.search_limit == Some(0) {
            return Err("search_limit must be positive".to_string());
        }
        Ok(())
    }
}
