//! ONNX classifier loading and inference using tract
//!
//! Each disease's classifier is a serialized ONNX file on local storage,
//! loaded and optimized once via tract-onnx. The feature count is read from
//! the model's declared input shape rather than hardcoded, since every
//! disease model has its own arity.

use super::{ArtifactError, ArtifactLoader, Classifier};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::infer::Factoid;
use tract_onnx::tract_hir::internal::DimLike;
use tracing::debug;

type TractPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A pre-trained binary classifier loaded from an ONNX artifact
pub struct OnnxClassifier {
    plan: TractPlan,
    input_arity: usize,
}

impl OnnxClassifier {
    /// Load and optimize a classifier from an ONNX file
    pub fn load(path: &Path) -> Result<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(path)
            .with_context(|| format!("failed to parse ONNX model {}", path.display()))?;

        let input_arity = declared_input_arity(&model)
            .with_context(|| format!("model {} has no usable input shape", path.display()))?;

        let plan = model
            .with_input_fact(0, f32::fact([1, input_arity]).into())
            .context("failed to set input shape")?
            .into_optimized()
            .context("failed to optimize model")?
            .into_runnable()
            .context("failed to create runnable model")?;

        debug!(path = %path.display(), input_arity, "Classifier artifact loaded");

        Ok(Self { plan, input_arity })
    }
}

/// Read the feature count from the model's declared input fact.
///
/// Classifiers are exported with a `[batch, n]` input; the batch dimension
/// may be symbolic, the feature dimension must be concrete.
fn declared_input_arity(model: &InferenceModel) -> Result<usize> {
    let fact = model.input_fact(0)?;
    let dims: Vec<_> = fact.shape.dims().collect();
    let feature_dim = dims.last().context("input declares no dimensions")?;
    let dim = feature_dim
        .concretize()
        .context("feature dimension is not concrete")?;
    let arity = dim.to_usize().context("feature dimension is symbolic")?;
    Ok(arity)
}

impl Classifier for OnnxClassifier {
    fn input_arity(&self) -> usize {
        self.input_arity
    }

    fn predict_probability(&self, features: &[f32]) -> Result<f32> {
        let input: Tensor =
            tract_ndarray::Array2::from_shape_vec((1, self.input_arity), features.to_vec())
                .context("feature vector does not match the model input shape")?
                .into();

        let outputs = self.plan.run(tvec!(input.into()))?;

        // Binary classifiers emit class probabilities as the final output;
        // label outputs, when present, come first.
        let scores = outputs.last().context("model produced no outputs")?;
        let view = scores.to_array_view::<f32>()?;
        let values: Vec<f32> = view.iter().copied().collect();

        let probability = match values.as_slice() {
            [] => anyhow::bail!("model produced an empty probability output"),
            [single] => *single,
            // [p_negative, p_positive]
            [.., positive] => *positive,
        };

        Ok(probability.clamp(0.0, 1.0))
    }
}

/// Resolves artifact references against a model directory on local storage
pub struct OnnxLoader {
    model_dir: PathBuf,
}

impl OnnxLoader {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    fn artifact_path(&self, artifact_ref: &str) -> PathBuf {
        self.model_dir.join(artifact_ref)
    }
}

impl ArtifactLoader for OnnxLoader {
    fn load(&self, artifact_ref: &str) -> Result<Arc<dyn Classifier>, ArtifactError> {
        let path = self.artifact_path(artifact_ref);
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                reference: artifact_ref.to_string(),
                path,
            });
        }

        let classifier =
            OnnxClassifier::load(&path).map_err(|source| ArtifactError::Malformed {
                reference: artifact_ref.to_string(),
                message: format!("{:#}", source),
            })?;

        Ok(Arc::new(classifier))
    }
}
