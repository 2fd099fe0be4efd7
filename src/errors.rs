//! Error types for the protowrap crate
//!
//! The plain conversion functions never fail. These errors surface only from
//! the checked timestamp decoder and from configuration loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtoWrapError {
    #[error("Timestamp out of range: seconds={seconds}, nanos={nanos}")]
    InvalidTimestamp { seconds: i64, nanos: i32 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
