pub mod config;
pub mod describe;
pub mod error;
pub mod fetch;
pub mod server;
pub mod vision;

pub use error::{Error, Result};
