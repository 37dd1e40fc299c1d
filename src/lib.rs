pub mod codec;
pub mod config;
pub mod format;
pub mod host;
pub mod metric;
pub mod parse;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Format Error: {0}")]
    FormatError(String),
    #[error("Corrupt Data Error: {0}")]
    CorruptDataError(String),
    #[error("Dimension Mismatch Error: {0}")]
    DimensionMismatchError(String),
    #[error("Unsupported Metric Error: {0}")]
    UnsupportedMetricError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use codec::{decode, decode_nullable, encode, encode_nullable, read_payload, write_payload};
pub use config::{Accumulation, MetricConfig};
pub use format::format_element;
pub use host::HostValue;
pub use metric::{distance, Metric};
pub use parse::parse_vector;
pub use vector::Vector;
