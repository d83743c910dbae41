#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod error;
mod hydrate;
mod latest;
mod loader;
mod page;
mod query;
mod resort;

pub use error::*;
pub use hydrate::*;
pub use latest::*;
pub use loader::*;
pub use page::*;
pub use query::*;
pub use resort::*;
