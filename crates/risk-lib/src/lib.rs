//! Health risk engine library
//!
//! This crate provides the core functionality for:
//! - The disease model registry and per-disease feature extraction
//! - Loading and caching pre-trained classifier artifacts
//! - Risk evaluation and tiering
//! - Per-session analysis state
//! - Static educational reference text

pub mod classifier;
pub mod evaluator;
pub mod info;
pub mod models;
pub mod registry;
pub mod session;

pub use classifier::{
    probability_to_percent, ArtifactCache, ArtifactError, ArtifactLoader, CacheStats, Classifier,
};
pub use evaluator::{
    EvaluateError, EvaluatorConfig, LoadFailurePolicy, RiskEvaluator, HIGH_RISK_PERCENT,
    MEDIUM_RISK_PERCENT,
};
pub use models::*;
pub use registry::{CatalogEntry, DiseaseEntry, DiseaseRegistry};
pub use session::SessionState;
