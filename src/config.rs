use crate::{Result, VectorError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Floating-point width used while summing metric terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accumulation {
    /// Sum in `f32`, the width elements are stored in. Squares below the
    /// `f32` range underflow to zero, so a cosine over very small magnitudes
    /// hits the zero-norm rule; use `Double` for such inputs.
    #[default]
    Single,
    /// Sum in `f64` and round the final result to `f32`. Results can differ
    /// from `Single` in the last few bits, more so for long vectors.
    Double,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricConfig {
    pub accumulation: Accumulation,
}

impl MetricConfig {
    pub fn new(accumulation: Accumulation) -> Self {
        Self { accumulation }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| VectorError::ConfigError(format!("Failed to parse metric config: {}", e)))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read metric config {}", path.display()))?;
        Self::from_json(&contents)
    }
}
