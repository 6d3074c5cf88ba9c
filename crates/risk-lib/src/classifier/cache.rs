//! Process-lifetime artifact cache
//!
//! Classifier artifacts are loaded lazily on first use and reused for the
//! remainder of the process. The registry is small and fixed; no eviction.
//! One logical writer per session; no locking.

use super::{ArtifactError, ArtifactLoader, Classifier, OnnxLoader};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Cache counters, observable for diagnostics and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub loaded: usize,
}

/// Load-or-reuse cache keyed by artifact reference
pub struct ArtifactCache {
    loader: Box<dyn ArtifactLoader>,
    loaded: HashMap<String, Arc<dyn Classifier>>,
    hits: u64,
    misses: u64,
}

impl ArtifactCache {
    pub fn new(loader: Box<dyn ArtifactLoader>) -> Self {
        Self {
            loader,
            loaded: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache backed by the ONNX loader over a local model directory
    pub fn with_model_dir(model_dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(OnnxLoader::new(model_dir)))
    }

    /// Resolve an artifact reference, loading it on first use.
    ///
    /// Idempotent and side-effect-free on a hit: the same reference returns
    /// the same shared classifier for the process lifetime. Failed loads are
    /// not cached.
    pub fn load(&mut self, artifact_ref: &str) -> Result<Arc<dyn Classifier>, ArtifactError> {
        if let Some(classifier) = self.loaded.get(artifact_ref) {
            self.hits += 1;
            return Ok(Arc::clone(classifier));
        }

        self.misses += 1;
        let classifier = self.loader.load(artifact_ref)?;
        debug!(
            artifact = artifact_ref,
            input_arity = classifier.input_arity(),
            "Classifier artifact cached"
        );
        self.loaded
            .insert(artifact_ref.to_string(), Arc::clone(&classifier));
        Ok(classifier)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            loaded: self.loaded.len(),
        }
    }
}
