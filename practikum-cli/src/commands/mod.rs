//! CLI command implementations

mod info;
mod init;
mod openapi;

pub use info::info;
pub use init::init;
pub use openapi::openapi;
