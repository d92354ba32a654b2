//! Configuration, errors and constants shared by the vcardio crates.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{CodecConfig, LoggingConfig, Settings, load_config};
pub use error::{CoreError, CoreResult};
