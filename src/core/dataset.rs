use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Immutable chart input: index-aligned values and labels.
///
/// A dataset is supplied once when the chart mounts and never mutates
/// afterwards; re-mounting with a new dataset restarts every animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from parallel value/label sequences.
    ///
    /// Lengths must match exactly; silently truncating or padding would hide
    /// an indexing bug in the host, so mismatches are rejected up front.
    /// Values must be finite and non-negative.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> ChartResult<Self> {
        if values.len() != labels.len() {
            return Err(ChartError::DatasetLengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }

        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "dataset value at index {index} must be finite and >= 0, got {value}"
                )));
            }
        }

        Ok(Self { values, labels })
    }

    pub fn from_pairs<L: Into<String>>(
        pairs: impl IntoIterator<Item = (f64, L)>,
    ) -> ChartResult<Self> {
        let (values, labels) = pairs
            .into_iter()
            .map(|(value, label)| (value, label.into()))
            .unzip();
        Self::new(values, labels)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Largest value in the dataset, `0.0` when empty.
    ///
    /// Construction guarantees all values are finite and non-negative, so a
    /// plain fold is enough here.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
