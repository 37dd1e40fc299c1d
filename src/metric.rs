use crate::config::{Accumulation, MetricConfig};
use crate::{vector::Vector, Result, VectorError};
use ndarray::{ArrayView1, NdFloat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Pairwise distance metrics. Smaller results mean more similar vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `1 - a.b / (|a| |b|)`, or `1` when either norm is zero.
    Cosine,
    /// L2 distance.
    Euclidean,
    /// Negated dot product.
    Dot,
    /// L1 distance.
    Manhattan,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Cosine,
        Metric::Euclidean,
        Metric::Dot,
        Metric::Manhattan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
            Metric::Dot => "dot",
            Metric::Manhattan => "manhattan",
        }
    }

    /// Distance with `f32` accumulation.
    pub fn distance(&self, v1: &Vector, v2: &Vector) -> Result<f32> {
        self.distance_with(&MetricConfig::default(), v1, v2)
    }

    pub fn distance_with(&self, config: &MetricConfig, v1: &Vector, v2: &Vector) -> Result<f32> {
        let (a, b) = paired_values(v1, v2)?;
        let (a, b) = (ArrayView1::from(a), ArrayView1::from(b));

        let result = match config.accumulation {
            Accumulation::Single => evaluate(*self, a, b),
            Accumulation::Double => {
                let (a, b) = (a.mapv(f64::from), b.mapv(f64::from));
                evaluate(*self, a.view(), b.view()) as f32
            }
        };
        Ok(result)
    }
}

/// Resolves `metric_name` (case-insensitive) and computes the distance.
pub fn distance(metric_name: &str, v1: &Vector, v2: &Vector) -> Result<f32> {
    metric_name.parse::<Metric>()?.distance(v1, v2)
}

fn evaluate<T: NdFloat>(metric: Metric, a: ArrayView1<T>, b: ArrayView1<T>) -> T {
    match metric {
        Metric::Cosine => {
            let norm_a = a.dot(&a).sqrt();
            let norm_b = b.dot(&b).sqrt();
            if norm_a == T::zero() || norm_b == T::zero() {
                T::one()
            } else {
                T::one() - a.dot(&b) / (norm_a * norm_b)
            }
        }
        Metric::Euclidean => {
            let diff = &a - &b;
            diff.dot(&diff).sqrt()
        }
        Metric::Dot => -a.dot(&b),
        Metric::Manhattan => (&a - &b).mapv(|x| x.abs()).sum(),
    }
}

fn paired_values<'a>(v1: &'a Vector, v2: &'a Vector) -> Result<(&'a [f32], &'a [f32])> {
    match (v1.values(), v2.values()) {
        (Some(a), Some(b)) if a.len() == b.len() => Ok((a, b)),
        (Some(a), Some(b)) => {
            debug!(left = a.len(), right = b.len(), "dimension mismatch");
            Err(VectorError::DimensionMismatchError(format!(
                "vectors have {} and {} dimensions",
                a.len(),
                b.len()
            )))
        }
        _ => {
            debug!("distance requested on a null vector");
            Err(VectorError::DimensionMismatchError(
                "null vectors have no dimension".to_string(),
            ))
        }
    }
}

impl FromStr for Metric {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                debug!(metric = s, "unsupported metric");
                let supported: Vec<&str> = Metric::ALL.iter().map(Metric::name).collect();
                VectorError::UnsupportedMetricError(format!(
                    "'{}' (supported: {})",
                    s,
                    supported.join(", ")
                ))
            })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
