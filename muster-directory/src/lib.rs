#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

pub mod client;
mod directory;
pub mod group;
pub mod operation;
pub mod primitives;
pub mod user;

pub use directory::*;
pub use primitives::*;

pub use paged::*;
