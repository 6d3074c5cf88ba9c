//! Classifier adapter
//!
//! Loads opaque pre-trained binary classifier artifacts and exposes a single
//! capability: given a fixed-length numeric feature vector, return the
//! probability of the positive class. Artifacts are cached per reference for
//! the process lifetime.

mod cache;
mod onnx;

pub use cache::{ArtifactCache, CacheStats};
pub use onnx::{OnnxClassifier, OnnxLoader};

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Error resolving or deserializing a classifier artifact. Not retried;
/// the skip-vs-abort policy lives with the evaluator.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("classifier artifact {reference} not found at {}", path.display())]
    NotFound { reference: String, path: PathBuf },

    #[error("classifier artifact {reference} could not be deserialized: {message}")]
    Malformed { reference: String, message: String },
}

/// A loaded, opaque binary classifier.
///
/// Implementations must be deterministic given identical features and do no
/// I/O after the initial load.
pub trait Classifier: Send + Sync {
    /// Number of input features the classifier expects
    fn input_arity(&self) -> usize;

    /// Probability of the positive class, in [0, 1].
    ///
    /// Requires `features.len() == self.input_arity()`; the caller enforces
    /// the precondition.
    fn predict_probability(&self, features: &[f32]) -> Result<f32>;
}

/// Resolves opaque artifact references to loaded classifiers
pub trait ArtifactLoader {
    fn load(&self, artifact_ref: &str) -> Result<Arc<dyn Classifier>, ArtifactError>;
}

/// Scale a positive-class probability to a percentage, rounded to two
/// decimal places.
pub fn probability_to_percent(probability: f32) -> f32 {
    let percent = probability.clamp(0.0, 1.0) * 100.0;
    (percent * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_scaling_and_rounding() {
        assert_eq!(probability_to_percent(0.81), 81.0);
        assert_eq!(probability_to_percent(0.4), 40.0);
        assert_eq!(probability_to_percent(0.3999), 39.99);
        assert_eq!(probability_to_percent(0.12345), 12.35);
    }

    #[test]
    fn test_percent_clamps_out_of_range_probabilities() {
        assert_eq!(probability_to_percent(-0.5), 0.0);
        assert_eq!(probability_to_percent(1.5), 100.0);
    }
}
