use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// A fixed-precision float vector, or the distinguished null value.
///
/// `Null` is distinct from an empty vector: `Vector::Values(vec![])` has
/// dimensionality 0 and takes part in metrics, `Null` does not.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vector {
    #[default]
    Null,
    Values(Vec<f32>),
}

impl Vector {
    pub fn new(data: Vec<f32>) -> Self {
        Vector::Values(data)
    }

    pub fn null() -> Self {
        Vector::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Vector::Null)
    }

    /// Element count. The null vector reports 0; use [`Vector::is_null`]
    /// to tell it apart from an empty vector.
    pub fn dimension(&self) -> usize {
        match self {
            Vector::Null => 0,
            Vector::Values(data) => data.len(),
        }
    }

    pub fn values(&self) -> Option<&[f32]> {
        match self {
            Vector::Null => None,
            Vector::Values(data) => Some(data),
        }
    }

    pub fn to_array(&self) -> Option<Array1<f32>> {
        self.values().map(|data| Array1::from_vec(data.to_vec()))
    }

    pub fn magnitude(&self) -> Option<f32> {
        self.values().map(|data| {
            let view = ArrayView1::from(data);
            view.dot(&view).sqrt()
        })
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Vector::Values(data)
    }
}

impl From<&[f32]> for Vector {
    fn from(data: &[f32]) -> Self {
        Vector::Values(data.to_vec())
    }
}

impl From<Array1<f32>> for Vector {
    fn from(data: Array1<f32>) -> Self {
        Vector::Values(data.to_vec())
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Vector::Values(iter.into_iter().collect())
    }
}
